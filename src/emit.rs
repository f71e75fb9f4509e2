use crate::error::Result;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Output {
    #[default]
    Stdout,
    File(PathBuf),
}

impl From<Option<PathBuf>> for Output {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(Output::Stdout, Output::File)
    }
}

/// Write each line followed by a newline. Writing to a file truncates it and
/// prints a confirmation on stdout instead of the content.
pub fn emit<S: AsRef<str>>(lines: &[S], output: &Output) -> Result<()> {
    match output {
        Output::Stdout => {
            let stdout = io::stdout();
            write_lines(&mut stdout.lock(), lines)?;
        }
        Output::File(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_lines(&mut writer, lines)?;
            writer.flush()?;
            log::debug!("Wrote {} lines to {}", lines.len(), path.display());
            println!(
                "Conversion completed successfully! Output written to: {}",
                path.display()
            );
        }
    }
    Ok(())
}

pub fn write_lines<W: Write, S: AsRef<str>>(writer: &mut W, lines: &[S]) -> io::Result<()> {
    for line in lines {
        writeln!(writer, "{}", line.as_ref())?;
    }
    Ok(())
}
