pub mod emit;
pub mod error;
pub mod header;
pub mod logging;
pub mod naming;
pub mod schema;
pub mod table;

pub use emit::{Output, emit};
pub use error::{ConversionError, Result};
pub use header::{GeneratedUnit, HeaderGenerator};
pub use schema::{JsonSchema, load_schema, parse_schema};
pub use table::{Delimiter, Row, TableGenerator};

/// Generate C++ header definitions for the object named `search_name`
/// from JSON Schema text.
pub fn generate_header(json_schema: &str, search_name: &str) -> Result<String> {
    let schema = parse_schema(json_schema)?;

    let generator = HeaderGenerator::new(search_name);
    Ok(generator.generate(&schema).render())
}

/// Flatten JSON Schema text into delimited table lines, header row first.
pub fn generate_table(json_schema: &str, delimiter: Delimiter) -> Result<Vec<String>> {
    let schema = parse_schema(json_schema)?;

    let generator = TableGenerator::new(delimiter);
    Ok(generator.generate(&schema))
}
