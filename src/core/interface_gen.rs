use crate::core::naming::derive_accessor_fragment;
use crate::core::signatures::{context_struct, getter_signature, init_signature, setter_signature};
use crate::domain::model::{
    ConstantSet, ContextStyle, DataSpec, GeneratorOptions, TypeKind, TypeSpec,
};

fn file_header(options: &GeneratorOptions) -> String {
    let guard = options.include_guard();
    format!(
        r"/**
 * \file {file}
 * \brief Type definitions and context functions for project
 * \details Contains all custom types, enumerations, and context initialization/accessor functions used in the project
 * \author {author}
 */

#ifndef {guard}
#define {guard}

#include <stdint.h>
#include <stdbool.h>

",
        file = options.interface_file_name(),
        author = options.author,
        guard = guard,
    )
}

/// 列舉成員以逗號分隔，逐一去除空白，最後一個成員也加上逗號
pub fn enum_members(declaration: &str) -> String {
    declaration
        .split(',')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(",\n    ")
}

/// 單一型別的註解行與宣告
pub fn type_declaration(spec: &TypeSpec) -> String {
    let mut out = format!("\n// {}\n", spec.comment);
    match &spec.kind {
        TypeKind::Atom => {
            out.push_str(&format!("typedef {} {};\n", spec.declaration, spec.name));
        }
        TypeKind::Enum => {
            out.push_str(&format!(
                "typedef enum {{\n    {},\n}} {};\n",
                enum_members(&spec.declaration),
                spec.name
            ));
        }
        TypeKind::Other(kind) => {
            tracing::warn!(
                "Type '{}' has unsupported kind '{}', only its comment is emitted",
                spec.name,
                kind
            );
        }
    }
    out
}

fn init_prototype(options: &GeneratorOptions) -> String {
    let ctx_param = match options.context_style {
        ContextStyle::Static => "",
        ContextStyle::Handle => " * \\param ctx : The context to initialize.\n",
    };
    format!(
        "\n/**\n * \\brief Initialize context.\n * \\brief Initialize context variables for the api.\n{} */\n{};\n",
        ctx_param,
        init_signature(options)
    )
}

fn accessor_prototypes(spec: &DataSpec, options: &GeneratorOptions) -> String {
    let name = derive_accessor_fragment(&spec.name);
    let ctx_param = match options.context_style {
        ContextStyle::Static => "",
        ContextStyle::Handle => " * \\param ctx : The context.\n",
    };
    format!(
        r"
/**
 * \brief Gets the {name} value.
 * \details Returns the current state of the {name}.
{ctx_param} * \return {ty} : The {name} value.
 */
{getter};

/**
 * \brief Sets the {name} value.
 * \details Sets the {name} to the given value.
{ctx_param} * \param value : The new value for the {name}.
 */
{setter};
",
        name = name,
        ty = spec.type_name,
        ctx_param = ctx_param,
        getter = getter_signature(spec, options),
        setter = setter_signature(spec, options),
    )
}

/// 產生介面檔 (.h)：常數、型別、初始化函式與存取函式宣告
pub fn generate_interface(
    types: &[TypeSpec],
    data: &[DataSpec],
    constants: &ConstantSet,
    options: &GeneratorOptions,
) -> String {
    let mut out = file_header(options);

    out.push_str("// [Domain values]\n");
    out.push_str(&constants.block);

    for spec in types {
        out.push_str(&type_declaration(spec));
    }

    if options.context_style == ContextStyle::Handle {
        out.push('\n');
        out.push_str(&context_struct(data, options));
    }

    out.push_str(&init_prototype(options));

    for spec in data {
        out.push_str(&accessor_prototypes(spec, options));
    }

    out.push_str(&format!("\n#endif // {}", options.include_guard()));
    out
}
