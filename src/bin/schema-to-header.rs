use clap::Parser;
use fw_schema_gen::{HeaderGenerator, Output, Result, emit, load_schema, logging};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "schema-to-header")]
#[command(about = "Convert JSON schema to C++ code", long_about = None)]
struct Cli {
    /// Path to the JSON schema file
    #[arg(value_name = "FILE_PATH")]
    file_path: PathBuf,

    /// Root name for the C++ structs
    #[arg(value_name = "SEARCH_NAME")]
    search_name: String,
}

fn run(cli: &Cli) -> Result<()> {
    let schema = load_schema(&cli.file_path)?;

    let generator = HeaderGenerator::new(cli.search_name.as_str());
    let unit = generator.generate(&schema);
    if !unit.matched {
        log::info!("No object named '{}' in {}", generator.search_name(), cli.file_path.display());
    }

    emit(&[unit.render()], &Output::Stdout)
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    // Errors are reported on stderr; the exit status stays 0.
    if let Err(err) = run(&cli) {
        eprintln!("{}", err);
    }
}
