use crate::core::domain_constants::setter_guard;
use crate::core::naming::derive_bound_scope_name;
use crate::core::signatures::{
    context_field, context_struct, getter_signature, init_signature, setter_signature,
};
use crate::domain::model::{ConstantSet, ContextStyle, DataSpec, GeneratorOptions, SetterGuard};

fn file_header(options: &GeneratorOptions) -> String {
    format!(
        r#"/**
 * \file {file}
 * \brief Context initialization and definitions for project
 * \details Contains initialization and definition functions for all custom types and enumerations used in the project
 * \author {author}
 */

#include "{interface}"

"#,
        file = options.implementation_file_name(),
        author = options.author,
        interface = options.interface_file_name(),
    )
}

fn init_body(data: &[DataSpec], options: &GeneratorOptions) -> String {
    let mut out = format!("{} {{\n", init_signature(options));
    // 初始值直接採用表格內容，不做範圍檢查
    for spec in data {
        out.push_str(&format!(
            "    {} = {};\n",
            context_field(spec, options),
            spec.init_value
        ));
    }
    out.push_str("}\n\n");
    out
}

/// setter 主體；超出範圍的值直接忽略
pub fn setter_body(field: &str, guard: &SetterGuard) -> String {
    match guard {
        SetterGuard::Range { min, max } => format!(
            "    if (value >= {min} && value <= {max}) {{\n        {field} = value;\n    }}\n"
        ),
        SetterGuard::Max { max } => {
            format!("    if (value <= {max}) {{\n        {field} = value;\n    }}\n")
        }
        SetterGuard::Unchecked => format!("    {field} = value;\n"),
    }
}

fn accessor_bodies(spec: &DataSpec, constants: &ConstantSet, options: &GeneratorOptions) -> String {
    let field = context_field(spec, options);
    let scope = derive_bound_scope_name(&spec.name, &options.type_suffix);
    let guard = setter_guard(constants, &scope);

    tracing::debug!("Setter for '{}' uses guard {:?}", spec.name, guard);

    format!(
        "\n{getter} {{\n    return {field};\n}}\n\n{setter} {{\n{body}}}\n",
        getter = getter_signature(spec, options),
        setter = setter_signature(spec, options),
        field = field,
        body = setter_body(&field, &guard),
    )
}

/// 產生實作檔 (.c)：context、初始化函式與帶範圍檢查的存取函式
pub fn generate_implementation(
    data: &[DataSpec],
    constants: &ConstantSet,
    options: &GeneratorOptions,
) -> String {
    let mut out = file_header(options);

    if options.context_style == ContextStyle::Static {
        out.push_str(&context_struct(data, options));
        out.push_str(&format!(
            "\n// Global context structure instance\nstatic {} context;\n\n",
            options.context_type
        ));
    }

    out.push_str(&init_body(data, options));

    for spec in data {
        out.push_str(&accessor_bodies(spec, constants, options));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain_constants::derive_constants;
    use crate::domain::model::{TypeKind, TypeSpec};

    fn atom(name: &str, domain: &str) -> TypeSpec {
        TypeSpec {
            comment: String::new(),
            kind: TypeKind::Atom,
            declaration: "uint8_t".to_string(),
            name: name.to_string(),
            domain: Some(domain.to_string()),
        }
    }

    fn data(name: &str, type_name: &str, init_value: &str) -> DataSpec {
        DataSpec {
            name: name.to_string(),
            type_name: type_name.to_string(),
            init_value: init_value.to_string(),
            comment: format!("{} comment", name),
        }
    }

    #[test]
    fn test_full_implementation_document() {
        let options = GeneratorOptions::default();
        let constants = derive_constants(
            &[
                atom("frame_number_t", "[1; 100]"),
                atom("speed_t", "[0; 255]"),
            ],
            &options.type_suffix,
        )
        .unwrap();
        let data = vec![
            data("frame_number", "frame_number_t", "1"),
            data("speed", "speed_t", "0"),
            data("distance", "distance_t", "0"),
        ];

        let text = generate_implementation(&data, &constants, &options);

        let expected = r#"/**
 * \file bcgv_api.c
 * \brief Context initialization and definitions for project
 * \details Contains initialization and definition functions for all custom types and enumerations used in the project
 * \author Raphael CAUSSE - Melvyn MUNOZ - Roland Cedric TAYO
 */

#include "bcgv_api.h"

// Context structure
typedef struct {
    frame_number_t frame_number; // frame_number comment
    speed_t speed; // speed comment
    distance_t distance; // distance comment
} context_t;

// Global context structure instance
static context_t context;

void bcgv_ctx_init() {
    context.frame_number = 1;
    context.speed = 0;
    context.distance = 0;
}


frame_number_t get_frame_number() {
    return context.frame_number;
}

void set_frame_number(frame_number_t value) {
    if (value >= FRAME_NUMBER_MIN && value <= FRAME_NUMBER_MAX) {
        context.frame_number = value;
    }
}

speed_t get_speed() {
    return context.speed;
}

void set_speed(speed_t value) {
    if (value <= SPEED_MAX) {
        context.speed = value;
    }
}

distance_t get_distance() {
    return context.distance;
}

void set_distance(distance_t value) {
    context.distance = value;
}
"#;

        assert_eq!(text, expected);
    }

    #[test]
    fn test_guard_uses_data_name_not_type_name() {
        let options = GeneratorOptions::default();
        let constants =
            derive_constants(&[atom("fuel_level_t", "[0; 40]")], &options.type_suffix).unwrap();

        // 型別有範圍但資料名稱不同時，不做檢查
        let text = generate_implementation(&[data("tank", "fuel_level_t", "40")], &constants, &options);
        assert!(text.contains("void set_tank(fuel_level_t value) {\n    context.tank = value;\n}\n"));
    }

    #[test]
    fn test_malformed_domain_leaves_setter_unchecked() {
        let options = GeneratorOptions::default();
        let constants =
            derive_constants(&[atom("speed_t", "[0;255]")], &options.type_suffix).unwrap();
        assert_eq!(constants.defined_count(), 0);

        let text = generate_implementation(&[data("speed", "speed_t", "0")], &constants, &options);
        assert!(text.contains("void set_speed(speed_t value) {\n    context.speed = value;\n}\n"));
        assert!(!text.contains("SPEED_MAX"));
    }

    #[test]
    fn test_field_names_are_lowercased() {
        let options = GeneratorOptions::default();
        let text = generate_implementation(
            &[data("Engine_RPM", "engine_rpm_t", "0")],
            &ConstantSet::default(),
            &options,
        );
        assert!(text.contains("    engine_rpm_t engine_rpm; // Engine_RPM comment\n"));
        assert!(text.contains("    context.engine_rpm = 0;\n"));
        assert!(text.contains("engine_rpm_t get_engine_rpm() {\n"));
    }

    #[test]
    fn test_handle_style_has_no_static_instance() {
        let options = GeneratorOptions {
            context_style: ContextStyle::Handle,
            ..GeneratorOptions::default()
        };
        let constants =
            derive_constants(&[atom("speed_t", "[0; 255]")], &options.type_suffix).unwrap();
        let text = generate_implementation(&[data("speed", "speed_t", "0")], &constants, &options);

        assert!(!text.contains("static context_t context;"));
        assert!(!text.contains("typedef struct"));
        assert!(text.contains("void bcgv_ctx_init(context_t *ctx) {\n    ctx->speed = 0;\n}\n"));
        assert!(text.contains("speed_t get_speed(const context_t *ctx) {\n    return ctx->speed;\n}\n"));
        assert!(text.contains(
            "void set_speed(context_t *ctx, speed_t value) {\n    if (value <= SPEED_MAX) {\n        ctx->speed = value;\n    }\n}\n"
        ));
    }
}
