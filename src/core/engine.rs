use crate::core::generator::parse_tables;
use crate::core::Pipeline;
use crate::domain::model::{GenerationReport, ParsedTables};
use crate::utils::error::Result;

pub struct GeneratorEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> GeneratorEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<GenerationReport> {
        tracing::info!("Starting code generation...");

        // Extract
        tracing::info!("Reading sheet...");
        let sheet = self.pipeline.extract().await?;
        tracing::info!("Read {} rows", sheet.len());

        // Transform
        tracing::info!("Generating sources...");
        let sources = self.pipeline.transform(sheet).await?;
        tracing::info!(
            "Generated {} types, {} data accessors, {} constants",
            sources.type_count,
            sources.data_count,
            sources.constant_count
        );

        // Load
        tracing::info!("Writing sources...");
        let report = self.pipeline.load(sources).await?;
        tracing::info!(
            "Sources saved to: {} and {}",
            report.interface_path,
            report.implementation_path
        );

        Ok(report)
    }

    /// 只讀取並解析表格，不寫入任何檔案
    pub async fn preview(&self) -> Result<ParsedTables> {
        let sheet = self.pipeline.extract().await?;
        parse_tables(&sheet)
    }
}
