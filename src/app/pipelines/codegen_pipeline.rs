use crate::adapters::csv_sheet::parse_sheet;
use crate::core::generator::generate_sources;
use crate::core::{ConfigProvider, GeneratedSources, GenerationReport, Pipeline, Sheet, Storage};
use crate::utils::error::Result;

/// 讀取試算表、產生 .h/.c 並寫回儲存空間
pub struct CodegenPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> CodegenPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for CodegenPipeline<S, C> {
    async fn extract(&self) -> Result<Sheet> {
        let delimiter = self.config.delimiter()?;
        tracing::debug!("Reading sheet from: {}", self.config.input_path());
        let data = self.storage.read_file(self.config.input_path()).await?;
        parse_sheet(&data, delimiter)
    }

    async fn transform(&self, sheet: Sheet) -> Result<GeneratedSources> {
        let options = self.config.generator_options();
        tracing::debug!("Generator options: {:?}", options);
        generate_sources(&sheet, &options)
    }

    async fn load(&self, sources: GeneratedSources) -> Result<GenerationReport> {
        let interface_path = self.config.interface_path();
        let implementation_path = self.config.implementation_path();

        tracing::debug!(
            "Writing interface ({} bytes) to {}",
            sources.interface.len(),
            interface_path
        );
        self.storage
            .write_file(&interface_path, sources.interface.as_bytes())
            .await?;

        tracing::debug!(
            "Writing implementation ({} bytes) to {}",
            sources.implementation.len(),
            implementation_path
        );
        self.storage
            .write_file(&implementation_path, sources.implementation.as_bytes())
            .await?;

        Ok(GenerationReport {
            interface_path,
            implementation_path,
            type_count: sources.type_count,
            data_count: sources.data_count,
            constant_count: sources.constant_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ContextStyle, GeneratorOptions};
    use crate::utils::error::CodegenError;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn with_file(path: &str, data: &str) -> Self {
            let mut files = HashMap::new();
            files.insert(path.to_string(), data.as_bytes().to_vec());
            Self {
                files: Arc::new(Mutex::new(files)),
            }
        }

        async fn get_file(&self, path: &str) -> Option<String> {
            let files = self.files.lock().await;
            files
                .get(path)
                .map(|data| String::from_utf8_lossy(data).into_owned())
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                CodegenError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        style: ContextStyle,
    }

    impl ConfigProvider for MockConfig {
        fn input_path(&self) -> &str {
            "sheet.csv"
        }

        fn delimiter(&self) -> Result<u8> {
            Ok(b',')
        }

        fn interface_path(&self) -> String {
            "include/bcgv_api.h".to_string()
        }

        fn implementation_path(&self) -> String {
            "src/bcgv_api.c".to_string()
        }

        fn generator_options(&self) -> GeneratorOptions {
            GeneratorOptions {
                context_style: self.style,
                ..GeneratorOptions::default()
            }
        }
    }

    const SHEET: &str = "\
,TYPES,,,
,Commentaire,Genre,Declaration,Nom,Domaine
,Frame number,atom,uint8_t,frame_number_t,\"[1; 100]\"
,Commands,atom,bool,cmd_t,
,,,,,
,DONNEES,,,
,Nom,Type,Valeur d'init,Commentaire
,frame_number,frame_number_t,1,Frame number in message
,cmd_wiper,cmd_t,0,Windshield wipers command
";

    #[tokio::test]
    async fn test_extract_reads_sheet_from_storage() {
        let storage = MockStorage::with_file("sheet.csv", SHEET);
        let pipeline = CodegenPipeline::new(storage, MockConfig { style: ContextStyle::Static });

        let sheet = pipeline.extract().await.unwrap();

        assert_eq!(sheet.len(), 9);
        assert_eq!(sheet.rows[0][1], "TYPES");
        assert_eq!(sheet.rows[2][5], "[1; 100]");
    }

    #[tokio::test]
    async fn test_extract_missing_input() {
        let storage = MockStorage::with_file("other.csv", SHEET);
        let pipeline = CodegenPipeline::new(storage, MockConfig { style: ContextStyle::Static });

        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(err, CodegenError::IoError(_)));
    }

    #[tokio::test]
    async fn test_transform_and_load_write_both_documents() {
        let storage = MockStorage::with_file("sheet.csv", SHEET);
        let pipeline =
            CodegenPipeline::new(storage.clone(), MockConfig { style: ContextStyle::Static });

        let sheet = pipeline.extract().await.unwrap();
        let sources = pipeline.transform(sheet).await.unwrap();
        let report = pipeline.load(sources).await.unwrap();

        assert_eq!(report.interface_path, "include/bcgv_api.h");
        assert_eq!(report.implementation_path, "src/bcgv_api.c");
        assert_eq!(report.type_count, 2);
        assert_eq!(report.data_count, 2);
        assert_eq!(report.constant_count, 2);

        let header = storage.get_file("include/bcgv_api.h").await.unwrap();
        assert!(header.contains("#define FRAME_NUMBER_MIN (1)\n#define FRAME_NUMBER_MAX (100)\n"));
        assert!(header.contains("typedef bool cmd_t;\n"));

        let source = storage.get_file("src/bcgv_api.c").await.unwrap();
        assert!(source.contains(
            "    if (value >= FRAME_NUMBER_MIN && value <= FRAME_NUMBER_MAX) {\n        context.frame_number = value;\n    }\n"
        ));
        assert!(source.contains("void set_cmd_wiper(cmd_t value) {\n    context.cmd_wiper = value;\n}\n"));
    }

    #[tokio::test]
    async fn test_transform_uses_configured_context_style() {
        let storage = MockStorage::with_file("sheet.csv", SHEET);
        let pipeline = CodegenPipeline::new(storage, MockConfig { style: ContextStyle::Handle });

        let sheet = pipeline.extract().await.unwrap();
        let sources = pipeline.transform(sheet).await.unwrap();

        assert!(sources.interface.contains("cmd_t get_cmd_wiper(const context_t *ctx);"));
        assert!(sources.implementation.contains("    ctx->cmd_wiper = 0;\n"));
    }

    #[tokio::test]
    async fn test_transform_rejects_sheet_without_markers() {
        let storage = MockStorage::with_file("sheet.csv", "Nom,Type\nspeed,speed_t\n");
        let pipeline = CodegenPipeline::new(storage, MockConfig { style: ContextStyle::Static });

        let sheet = pipeline.extract().await.unwrap();
        let err = pipeline.transform(sheet).await.unwrap_err();
        assert!(matches!(err, CodegenError::MissingMarker { .. }));
    }
}
