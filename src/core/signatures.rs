//! 介面檔與實作檔共用的 C 宣告片段。

use crate::core::naming::{derive_accessor_fragment, getter_name, setter_name};
use crate::domain::model::{ContextStyle, DataSpec, GeneratorOptions};

pub fn init_signature(options: &GeneratorOptions) -> String {
    match options.context_style {
        ContextStyle::Static => format!("void {}()", options.init_function),
        ContextStyle::Handle => format!(
            "void {}({} *ctx)",
            options.init_function, options.context_type
        ),
    }
}

pub fn getter_signature(spec: &DataSpec, options: &GeneratorOptions) -> String {
    match options.context_style {
        ContextStyle::Static => format!("{} {}()", spec.type_name, getter_name(&spec.name)),
        ContextStyle::Handle => format!(
            "{} {}(const {} *ctx)",
            spec.type_name,
            getter_name(&spec.name),
            options.context_type
        ),
    }
}

pub fn setter_signature(spec: &DataSpec, options: &GeneratorOptions) -> String {
    match options.context_style {
        ContextStyle::Static => format!(
            "void {}({} value)",
            setter_name(&spec.name),
            spec.type_name
        ),
        ContextStyle::Handle => format!(
            "void {}({} *ctx, {} value)",
            setter_name(&spec.name),
            options.context_type,
            spec.type_name
        ),
    }
}

/// 存取 context 欄位的運算式 (`context.speed` 或 `ctx->speed`)
pub fn context_field(spec: &DataSpec, options: &GeneratorOptions) -> String {
    let field = derive_accessor_fragment(&spec.name);
    match options.context_style {
        ContextStyle::Static => format!("context.{}", field),
        ContextStyle::Handle => format!("ctx->{}", field),
    }
}

/// 保存所有資料變數的 context 結構
pub fn context_struct(data: &[DataSpec], options: &GeneratorOptions) -> String {
    let mut out = String::from("// Context structure\ntypedef struct {\n");
    for spec in data {
        out.push_str(&format!(
            "    {} {}; // {}\n",
            spec.type_name,
            derive_accessor_fragment(&spec.name),
            spec.comment
        ));
    }
    out.push_str(&format!("}} {};\n", options.context_type));
    out
}
