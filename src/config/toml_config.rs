use crate::core::ConfigProvider;
use crate::domain::model::{ContextStyle, GeneratorOptions};
use crate::utils::error::{CodegenError, Result};
use crate::utils::validation::{
    validate_file_extensions, validate_identifier, validate_non_empty_string, validate_path,
    Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub header: HeaderConfig,
    pub naming: NamingConfig,
    pub generation: GenerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub path: String,
    /// 單一字元，或 "tab"
    pub delimiter: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: "app_types_data.csv".to_string(),
            delimiter: ",".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub root: String,
    pub include_dir: String,
    pub src_dir: String,
    pub basename: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: ".".to_string(),
            include_dir: "app/lib/bcgv_api/include".to_string(),
            src_dir: "app/lib/bcgv_api/src".to_string(),
            basename: "bcgv_api".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub author: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            author: GeneratorOptions::default().author,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    pub type_suffix: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            type_suffix: "_t".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub init_function: String,
    pub context_type: String,
    pub context_style: ContextStyle,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        let defaults = GeneratorOptions::default();
        Self {
            init_function: defaults.init_function,
            context_type: defaults.context_type,
            context_style: defaults.context_style,
        }
    }
}

/// "," / ";" / "tab" / "\t" 轉為單一位元組
pub fn parse_delimiter(text: &str) -> Result<u8> {
    match text {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ if text.len() == 1 && text.is_ascii() => Ok(text.as_bytes()[0]),
        _ => Err(CodegenError::InvalidConfigValueError {
            field: "input.delimiter".to_string(),
            value: text.to_string(),
            reason: "Delimiter must be a single ASCII character or 'tab'".to_string(),
        }),
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CodegenError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CodegenError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BCGV_ROOT})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_path("input.path", &self.input.path)?;
        validate_file_extensions(
            "input.path",
            std::slice::from_ref(&self.input.path),
            &["csv", "tsv", "txt"],
        )?;
        parse_delimiter(&self.input.delimiter)?;

        validate_path("output.root", &self.output.root)?;
        validate_path("output.include_dir", &self.output.include_dir)?;
        validate_path("output.src_dir", &self.output.src_dir)?;
        validate_identifier("output.basename", &self.output.basename)?;

        validate_non_empty_string("header.author", &self.header.author)?;
        validate_identifier("generation.init_function", &self.generation.init_function)?;
        validate_identifier("generation.context_type", &self.generation.context_type)?;

        if !self.naming.type_suffix.is_empty() {
            validate_identifier("naming.type_suffix", &self.naming.type_suffix)?;
        }

        Ok(())
    }

    fn output_file(&self, dir: &str, file_name: &str) -> String {
        Path::new(&self.output.root)
            .join(dir)
            .join(file_name)
            .to_string_lossy()
            .into_owned()
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.input.path
    }

    fn delimiter(&self) -> Result<u8> {
        parse_delimiter(&self.input.delimiter)
    }

    fn interface_path(&self) -> String {
        let file_name = self.generator_options().interface_file_name();
        self.output_file(&self.output.include_dir, &file_name)
    }

    fn implementation_path(&self) -> String {
        let file_name = self.generator_options().implementation_file_name();
        self.output_file(&self.output.src_dir, &file_name)
    }

    fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            basename: self.output.basename.clone(),
            author: self.header.author.clone(),
            init_function: self.generation.init_function.clone(),
            context_type: self.generation.context_type.clone(),
            context_style: self.generation.context_style,
            type_suffix: self.naming.type_suffix.clone(),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
