//! Identifier derivation for generated header code.

use convert_case::{Case, Casing};

/// Type name for a schema key: `scan_interval` becomes `ScanInterval`.
pub fn type_name(key: &str) -> String {
    key.to_case(Case::Pascal)
}

/// Field name for a schema key: the type name, lower-cased.
pub fn field_name(key: &str) -> String {
    type_name(key).to_lowercase()
}

/// Underscore-joined ancestry used to name constants.
pub fn constant_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        type_name(key)
    } else {
        format!("{}_{}", parent, type_name(key))
    }
}

pub fn constant_name(path: &str, suffix: &str) -> String {
    format!("{}_{}", path.to_uppercase(), suffix)
}

pub fn enum_member(value: &str) -> String {
    format!("e_{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_cases_snake_keys() {
        assert_eq!(type_name("scan_interval"), "ScanInterval");
        assert_eq!(type_name("fw"), "Fw");
        assert_eq!(type_name("a"), "A");
    }

    #[test]
    fn field_names_are_lower_case() {
        assert_eq!(field_name("scan_interval"), "scaninterval");
        assert_eq!(field_name("b"), "b");
    }

    #[test]
    fn constant_names_follow_ancestry() {
        let path = constant_path(&constant_path("", "scanner"), "rssi_threshold");
        assert_eq!(path, "Scanner_RssiThreshold");
        assert_eq!(constant_name(&path, "MIN"), "SCANNER_RSSITHRESHOLD_MIN");
        assert_eq!(constant_name(&constant_path("", "fw"), "DEFAULT"), "FW_DEFAULT");
    }

    #[test]
    fn enum_members_keep_case() {
        assert_eq!(enum_member("A"), "e_A");
        assert_eq!(enum_member("low_power"), "e_low_power");
    }
}
