use crate::core::naming::derive_bound_scope_name;
use crate::core::segmenter::TYPES_MARKER;
use crate::domain::model::{BoundConstant, ConstantSet, SetterGuard, TypeSpec};
use crate::utils::error::{CodegenError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// `[MIN; MAX]`，可出現在 Domaine 文字中的任何位置
static DOMAIN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(-?\d+); (-?\d+)\]").expect("domain pattern is valid"));

/// 解析單一型別的範圍；無 Domaine 或格式不符時回傳 None
pub fn derive_bound(spec: &TypeSpec, type_suffix: &str) -> Option<BoundConstant> {
    let domain = spec.domain.as_deref()?;
    let caps = DOMAIN_PATTERN.captures(domain)?;
    let min = caps[1].to_string();
    let max = caps[2].to_string();

    Some(BoundConstant {
        scope_name: derive_bound_scope_name(&spec.name, type_suffix),
        // 最小值為 0 時視為無號範圍，只輸出 MAX
        has_min: min != "0",
        min,
        max,
    })
}

/// 兩個型別推導出相同常數名稱時回報 DuplicateName
pub fn derive_constants(types: &[TypeSpec], type_suffix: &str) -> Result<ConstantSet> {
    let mut set = ConstantSet::default();

    for spec in types {
        match derive_bound(spec, type_suffix) {
            Some(bound) => {
                if set.has_scope(&bound.scope_name) {
                    return Err(CodegenError::DuplicateName {
                        region: TYPES_MARKER.to_string(),
                        name: bound.scope_name,
                    });
                }
                tracing::debug!(
                    "Domain for '{}': {} [{}; {}]",
                    spec.name,
                    bound.scope_name,
                    bound.min,
                    bound.max
                );
                set.push(bound);
            }
            None => {
                if let Some(domain) = &spec.domain {
                    tracing::warn!(
                        "Domain '{}' of type '{}' is not in [min; max] form, no bounds emitted",
                        domain,
                        spec.name
                    );
                }
            }
        }
    }

    Ok(set)
}

/// 依已產生的常數決定 setter 的檢查方式
pub fn setter_guard(constants: &ConstantSet, scope_name: &str) -> SetterGuard {
    let min = format!("{}_MIN", scope_name);
    let max = format!("{}_MAX", scope_name);

    match (constants.contains(&min), constants.contains(&max)) {
        (true, true) => SetterGuard::Range { min, max },
        (_, true) => SetterGuard::Max { max },
        _ => SetterGuard::Unchecked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::TypeKind;

    fn atom(name: &str, domain: Option<&str>) -> TypeSpec {
        TypeSpec {
            comment: String::new(),
            kind: TypeKind::Atom,
            declaration: "uint8_t".to_string(),
            name: name.to_string(),
            domain: domain.map(str::to_string),
        }
    }

    #[test]
    fn test_zero_minimum_emits_only_max() {
        let set = derive_constants(&[atom("speed_t", Some("[0; 255]"))], "_t").unwrap();
        assert_eq!(set.block, "#define SPEED_MAX (255)\n\n");
        assert!(set.contains("SPEED_MAX"));
        assert!(!set.contains("SPEED_MIN"));
    }

    #[test]
    fn test_nonzero_minimum_emits_min_then_max() {
        let set = derive_constants(&[atom("frame_number_t", Some("[1; 100]"))], "_t").unwrap();
        assert_eq!(
            set.block,
            "#define FRAME_NUMBER_MIN (1)\n#define FRAME_NUMBER_MAX (100)\n\n"
        );
    }

    #[test]
    fn test_negative_minimum() {
        let bound = derive_bound(&atom("temp_t", Some("[-40; 125]")), "_t").unwrap();
        assert!(bound.has_min);
        assert_eq!(bound.min, "-40");
        assert_eq!(bound.max, "125");
    }

    #[test]
    fn test_domain_found_inside_text() {
        let bound = derive_bound(&atom("rpm_t", Some("tr/min [0; 10000] max")), "_t").unwrap();
        assert_eq!(bound.max, "10000");
        assert!(!bound.has_min);
    }

    #[test]
    fn test_unparseable_domains_emit_nothing() {
        let types = vec![
            atom("a_t", None),
            atom("b_t", Some("0..255")),
            atom("c_t", Some("[0;255]")),
            atom("d_t", Some("[0.5; 1]")),
            atom("e_t", Some("nan")),
        ];
        let set = derive_constants(&types, "_t").unwrap();
        assert!(set.block.is_empty());
        assert!(set.constants.is_empty());
    }

    #[test]
    fn test_constants_keep_input_order() {
        let types = vec![
            atom("fuel_level_t", Some("[0; 40]")),
            atom("cmd_t", None),
            atom("frame_number_t", Some("[1; 100]")),
        ];
        let set = derive_constants(&types, "_t").unwrap();
        let scopes: Vec<&str> = set.constants.iter().map(|c| c.scope_name.as_str()).collect();
        assert_eq!(scopes, vec!["FUEL_LEVEL", "FRAME_NUMBER"]);
    }

    #[test]
    fn test_setter_guard_selection() {
        let set = derive_constants(
            &[
                atom("frame_number_t", Some("[1; 100]")),
                atom("fuel_level_t", Some("[0; 40]")),
            ],
            "_t",
        )
        .unwrap();

        assert_eq!(
            setter_guard(&set, "FRAME_NUMBER"),
            SetterGuard::Range {
                min: "FRAME_NUMBER_MIN".to_string(),
                max: "FRAME_NUMBER_MAX".to_string()
            }
        );
        assert_eq!(
            setter_guard(&set, "FUEL_LEVEL"),
            SetterGuard::Max {
                max: "FUEL_LEVEL_MAX".to_string()
            }
        );
        assert_eq!(setter_guard(&set, "SPEED"), SetterGuard::Unchecked);
    }

    #[test]
    fn test_colliding_scope_names_are_rejected() {
        let types = vec![
            atom("speed_t", Some("[0; 255]")),
            atom("SPEED", Some("[-5; 5]")),
        ];
        let err = derive_constants(&types, "_t").unwrap_err();
        assert!(matches!(
            err,
            CodegenError::DuplicateName { region, name } if region == "TYPES" && name == "SPEED"
        ));
    }

    #[test]
    fn test_same_scope_without_domain_is_accepted() {
        let types = vec![atom("speed_t", Some("[0; 255]")), atom("SPEED", None)];
        let set = derive_constants(&types, "_t").unwrap();
        assert_eq!(set.block, "#define SPEED_MAX (255)

");
    }
}
