use crate::domain::model::{GeneratedSources, GenerationReport, GeneratorOptions, Sheet};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    /// 設定值不是單一 ASCII 字元或 "tab" 時回報錯誤
    fn delimiter(&self) -> Result<u8>;
    /// 介面檔 (.h) 的完整輸出路徑
    fn interface_path(&self) -> String;
    /// 實作檔 (.c) 的完整輸出路徑
    fn implementation_path(&self) -> String;
    fn generator_options(&self) -> GeneratorOptions;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Sheet>;
    async fn transform(&self, sheet: Sheet) -> Result<GeneratedSources>;
    async fn load(&self, sources: GeneratedSources) -> Result<GenerationReport>;
}
