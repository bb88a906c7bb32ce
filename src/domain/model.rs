use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 試算表內容：逐列的字串儲存格，已補齊為矩形
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// 一個區塊：標題列加上非空白資料列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub marker: String,
    /// 標題列在試算表中的索引 (0-based)
    pub header_index: usize,
    pub header: Vec<String>,
    /// (試算表索引, 儲存格)
    pub rows: Vec<(usize, Vec<String>)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Atom,
    Enum,
    /// 無法辨識的 Genre，保留原文
    Other(String),
}

impl TypeKind {
    pub fn parse(text: &str) -> Self {
        match text.trim().to_lowercase().as_str() {
            "atom" => TypeKind::Atom,
            "enum" => TypeKind::Enum,
            _ => TypeKind::Other(text.trim().to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSpec {
    pub comment: String,
    pub kind: TypeKind,
    pub declaration: String,
    pub name: String,
    pub domain: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub init_value: String,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundConstant {
    pub scope_name: String,
    pub has_min: bool,
    pub min: String,
    pub max: String,
}

impl BoundConstant {
    pub fn min_name(&self) -> String {
        format!("{}_MIN", self.scope_name)
    }

    pub fn max_name(&self) -> String {
        format!("{}_MAX", self.scope_name)
    }
}

/// 產生的常數：有序文字區塊與可查詢的名稱集合
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstantSet {
    pub constants: Vec<BoundConstant>,
    pub block: String,
    names: BTreeSet<String>,
}

impl ConstantSet {
    pub fn push(&mut self, constant: BoundConstant) {
        if constant.has_min {
            self.block
                .push_str(&format!("#define {} ({})\n", constant.min_name(), constant.min));
            self.names.insert(constant.min_name());
        }
        self.block
            .push_str(&format!("#define {} ({})\n\n", constant.max_name(), constant.max));
        self.names.insert(constant.max_name());
        self.constants.push(constant);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn has_scope(&self, scope_name: &str) -> bool {
        self.constants.iter().any(|c| c.scope_name == scope_name)
    }

    /// 產生的常數名稱數量
    pub fn defined_count(&self) -> usize {
        self.names.len()
    }
}

/// 某個資料變數 setter 的範圍檢查
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetterGuard {
    Range { min: String, max: String },
    Max { max: String },
    Unchecked,
}

/// 產生 C 程式碼時的 context 持有方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ContextStyle {
    /// 模組私有的 static 實例，存取函式不帶參數
    #[default]
    Static,
    /// 由呼叫端持有 context，存取函式接收指標
    Handle,
}

/// 產生器的固定輸出參數
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorOptions {
    /// 輸出檔名（不含副檔名），也用於 include guard
    pub basename: String,
    pub author: String,
    pub init_function: String,
    pub context_type: String,
    pub context_style: ContextStyle,
    /// 型別名稱結尾標記，推導常數名稱時移除
    pub type_suffix: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            basename: "bcgv_api".to_string(),
            author: "Raphael CAUSSE - Melvyn MUNOZ - Roland Cedric TAYO".to_string(),
            init_function: "bcgv_ctx_init".to_string(),
            context_type: "context_t".to_string(),
            context_style: ContextStyle::Static,
            type_suffix: "_t".to_string(),
        }
    }
}

impl GeneratorOptions {
    pub fn interface_file_name(&self) -> String {
        format!("{}.h", self.basename)
    }

    pub fn implementation_file_name(&self) -> String {
        format!("{}.c", self.basename)
    }

    pub fn include_guard(&self) -> String {
        format!("{}_H", self.basename.to_uppercase())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTables {
    pub types: Vec<TypeSpec>,
    pub data: Vec<DataSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSources {
    pub interface: String,
    pub implementation: String,
    pub type_count: usize,
    pub data_count: usize,
    pub constant_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub interface_path: String,
    pub implementation_path: String,
    pub type_count: usize,
    pub data_count: usize,
    pub constant_count: usize,
}
