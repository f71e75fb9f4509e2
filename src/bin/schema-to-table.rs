use clap::Parser;
use fw_schema_gen::{Delimiter, Output, Result, TableGenerator, emit, load_schema, logging};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "schema-to-table")]
#[command(about = "Convert JSON schema to CSV", long_about = None)]
struct Cli {
    /// Input file name
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file name (prints to stdout if not provided)
    #[arg(long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Use tab delimiter (TSV) instead of comma (CSV)
    #[arg(short, long)]
    tab: bool,
}

fn run(cli: Cli) -> Result<()> {
    let delimiter = if cli.tab { Delimiter::Tab } else { Delimiter::Comma };

    let schema = load_schema(&cli.input)?;
    let lines = TableGenerator::new(delimiter).generate(&schema);

    emit(&lines, &Output::from(cli.output))
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    // Errors are reported on stderr; the exit status stays 0.
    if let Err(err) = run(cli) {
        eprintln!("{}", err);
    }
}
