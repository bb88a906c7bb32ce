//! 由單一 Nom 欄位推導出所有產生的識別字。

/// 範圍常數前綴：大寫並移除結尾的型別標記 (`speed_t` -> `SPEED`)
pub fn derive_bound_scope_name(name: &str, type_suffix: &str) -> String {
    let upper = name.trim().to_uppercase();
    let suffix = type_suffix.to_uppercase();

    match upper.strip_suffix(suffix.as_str()) {
        Some(stripped) if !suffix.is_empty() && !stripped.is_empty() => stripped.to_string(),
        _ => upper,
    }
}

/// 存取函式與 context 欄位名稱 (`Speed` -> `speed`)
pub fn derive_accessor_fragment(name: &str) -> String {
    name.trim().to_lowercase()
}

pub fn getter_name(name: &str) -> String {
    format!("get_{}", derive_accessor_fragment(name))
}

pub fn setter_name(name: &str) -> String {
    format!("set_{}", derive_accessor_fragment(name))
}
