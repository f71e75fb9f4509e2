use crate::naming;
use crate::schema::{JsonSchema, PropertyKind, SchemaObject};
use serde_json::Value;

/// Text fragments produced by one header generation run, in discovery order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedUnit {
    pub enums: Vec<String>,
    pub constants: Vec<String>,
    pub records: Vec<String>,
    /// Whether the search name was found.
    pub matched: bool,
}

impl GeneratedUnit {
    /// Enumerations first, then constants, then records.
    pub fn render(&self) -> String {
        self.enums
            .iter()
            .chain(&self.constants)
            .chain(&self.records)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn push_enum(&mut self, enum_type: &str, values: &[Value]) {
        let mut lines = vec![format!("enum class {} {{", enum_type)];
        for value in values {
            lines.push(format!("    {},", naming::enum_member(&literal(value))));
        }
        lines.push("};\n".to_string());
        self.enums.push(lines.join("\n"));
    }

    fn push_numeric_constants(&mut self, c_type: &str, path: &str, prop: &SchemaObject) {
        let bounds = [
            ("DEFAULT", &prop.default),
            ("MIN", &prop.minimum),
            ("MAX", &prop.maximum),
        ];
        for (suffix, value) in bounds {
            if let Some(value) = value {
                self.constants.push(format!(
                    "constexpr {} {} = {};",
                    c_type,
                    naming::constant_name(path, suffix),
                    literal(value)
                ));
            }
        }
    }

    /// Emit `struct <name>_t` for `obj`. Nested records are pushed before
    /// the record that contains them.
    fn push_record(&mut self, name: &str, obj: &SchemaObject) {
        let mut lines = vec![format!("struct {}_t {{", name)];

        for (key, prop) in obj.properties() {
            let Some(kind) = prop.kind() else {
                continue;
            };
            let type_name = naming::type_name(key);
            let field = naming::field_name(key);

            match kind {
                PropertyKind::Object => {
                    lines.push(format!("    {} {};", type_name, field));
                    self.push_record(&type_name, prop);
                }
                PropertyKind::String => {
                    if let Some(values) = &prop.enum_ {
                        let enum_type = format!("{}_{}Type", name, type_name);
                        self.push_enum(&enum_type, values);
                        lines.push(format!("    {} {};", enum_type, field));
                    }
                }
                PropertyKind::Integer => lines.push(format!("    int32_t {};", field)),
                PropertyKind::Number => lines.push(format!("    double {};", field)),
                PropertyKind::Boolean => lines.push(format!("    bool {};", field)),
                PropertyKind::Other => {}
            }
        }

        lines.push("};\n".to_string());
        log::debug!("Generated record {}_t", name);
        self.records.push(lines.join("\n"));
    }
}

pub struct HeaderGenerator {
    search_name: String,
}

impl HeaderGenerator {
    pub fn new(search_name: impl Into<String>) -> Self {
        Self {
            search_name: search_name.into(),
        }
    }

    pub fn search_name(&self) -> &str {
        &self.search_name
    }

    /// Walk the schema depth-first until an object named after the search
    /// name is found, collecting enumerations and constants for everything
    /// visited on the way, then expand the match into records.
    pub fn generate(&self, schema: &JsonSchema) -> GeneratedUnit {
        let mut unit = GeneratedUnit::default();
        if let Some(root) = schema.as_object() {
            let matched = self.search(root, "", &mut unit);
            unit.matched = matched;
        }
        unit
    }

    fn search(&self, obj: &SchemaObject, parent: &str, unit: &mut GeneratedUnit) -> bool {
        for (key, prop) in obj.properties() {
            let Some(kind) = prop.kind() else {
                continue;
            };
            let path = naming::constant_path(parent, key);

            match kind {
                PropertyKind::Object => {
                    if *key == self.search_name {
                        log::debug!("Found '{}' at {}", key, path);
                        unit.push_record(&naming::type_name(key), prop);
                        return true;
                    }
                    if self.search(prop, &path, unit) {
                        return true;
                    }
                }
                PropertyKind::String => {
                    if let Some(values) = &prop.enum_ {
                        let enum_type = naming::type_name(key);
                        unit.push_enum(&enum_type, values);
                        if let Some(default) = &prop.default {
                            unit.constants.push(format!(
                                "constexpr {t} {} = {t}::{};\n",
                                naming::constant_name(&path, "DEFAULT"),
                                naming::enum_member(&literal(default).to_lowercase()),
                                t = enum_type
                            ));
                        }
                    }
                }
                PropertyKind::Integer => unit.push_numeric_constants("int32_t", &path, prop),
                PropertyKind::Number => unit.push_numeric_constants("double", &path, prop),
                PropertyKind::Boolean => {
                    if let Some(default) = &prop.default {
                        unit.constants.push(format!(
                            "constexpr bool {} = {};",
                            naming::constant_name(&path, "DEFAULT"),
                            is_truthy(default)
                        ));
                    }
                }
                PropertyKind::Other => {}
            }
        }
        false
    }
}

/// A JSON value as it should appear in generated source.
fn literal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
