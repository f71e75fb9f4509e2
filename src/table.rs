use crate::schema::{JsonSchema, PropertyKind, SchemaObject};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
        }
    }
}

/// One leaf field of the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub path: String,
    pub type_tag: String,
    pub version: String,
    pub description: String,
}

impl Row {
    /// Comma mode always quotes the description. Embedded quotes are left as is.
    pub fn render(&self, delimiter: Delimiter) -> String {
        let d = delimiter.as_char();
        let description = normalize_description(&self.description);
        let description = match delimiter {
            Delimiter::Comma => format!("\"{}\"", description),
            Delimiter::Tab => description,
        };
        format!(
            "{}{d}{}{d}{}{d}{}",
            self.path, self.type_tag, self.version, description
        )
    }
}

pub fn header_row(delimiter: Delimiter) -> String {
    let d = delimiter.as_char();
    format!("Name{d}Type{d}Version{d}Description")
}

/// Flatten every leaf property of the schema into a row, in document order.
pub fn flatten(schema: &JsonSchema) -> Vec<Row> {
    let mut rows = Vec::new();
    if let Some(root) = schema.as_object() {
        flatten_into(root, "", "", &mut rows);
    }
    rows
}

fn flatten_into(obj: &SchemaObject, parent_path: &str, parent_version: &str, rows: &mut Vec<Row>) {
    for (key, prop) in obj.properties() {
        let path = if parent_path.is_empty() {
            key.clone()
        } else {
            format!("{}/{}", parent_path, key)
        };
        let version = prop
            .firmware_version()
            .unwrap_or_else(|| parent_version.to_string());

        if prop.kind() == Some(PropertyKind::Object) {
            flatten_into(prop, &path, &version, rows);
        } else {
            rows.push(Row {
                path,
                type_tag: prop.type_.as_ref().map(|t| t.label()).unwrap_or_default(),
                version,
                description: prop.description_text().to_string(),
            });
        }
    }
}

fn normalize_description(description: &str) -> String {
    description.replace('\n', " ").replace('\t', "    ")
}

pub struct TableGenerator {
    delimiter: Delimiter,
}

impl TableGenerator {
    pub fn new(delimiter: Delimiter) -> Self {
        Self { delimiter }
    }

    /// Header row followed by one line per leaf field.
    pub fn generate(&self, schema: &JsonSchema) -> Vec<String> {
        let rows = flatten(schema);
        log::debug!("Flattened schema into {} rows", rows.len());

        let mut lines = Vec::with_capacity(rows.len() + 1);
        lines.push(header_row(self.delimiter));
        lines.extend(rows.iter().map(|row| row.render(self.delimiter)));
        lines
    }
}

impl Default for TableGenerator {
    fn default() -> Self {
        Self::new(Delimiter::default())
    }
}
