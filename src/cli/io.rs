use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Read the transcript from a file, or stdin when no path or "-" is given.
pub fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {:?}", path)),
        _ => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read stdin")?;
            Ok(content)
        }
    }
}

/// Write the result to a file, or stdout.
pub fn write_output(output: Option<&PathBuf>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write output file {:?}", path))?;
            eprintln!("Result saved to: {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}
