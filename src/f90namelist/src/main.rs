// f90namelist/src/main.rs

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use f90namelist::{Namelist, WriteOptions};
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Namelist,
    Json,
    Yaml,
}

#[derive(Parser)]
#[command(name = "f90namelist")]
#[command(about = "Parse a Fortran namelist file and write it back out", long_about = None)]
#[command(version)]
struct Cli {
    /// Namelist file to read
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Write arrays as one `name(k) = value` line per element
    #[arg(long)]
    expanded: bool,

    /// End every assignment line with a comma
    #[arg(long)]
    end_comma: bool,

    /// Overwrite OUTPUT if it already exists
    #[arg(long)]
    force: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Namelist)]
    format: Format,
}

fn render(nml: &Namelist, format: Format, options: &WriteOptions) -> Result<String> {
    let text = match format {
        Format::Namelist => nml.to_fortran_string(options)?,
        #[cfg(feature = "json")]
        Format::Json => f90namelist::to_json(nml)?,
        #[cfg(feature = "yaml")]
        Format::Yaml => f90namelist::to_yaml(nml)?,
        #[allow(unreachable_patterns)]
        other => bail!(
            "{:?} output is not available in this build; enable the matching cargo feature",
            other
        ),
    };
    Ok(text)
}

fn entrypoint() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let nml = f90namelist::read(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;
    info!(
        "read {} groups from {}",
        nml.len(),
        cli.input.display()
    );

    let options = WriteOptions {
        force: cli.force,
        array_inline: !cli.expanded,
        end_comma: cli.end_comma,
        end_newline: true,
        ..WriteOptions::default()
    };
    let text = render(&nml, cli.format, &options)?;

    match cli.output {
        Some(path) => {
            if !options.force && path.exists() {
                return Err(f90namelist::F90nmlError::FileAlreadyExists(path).into());
            }
            std::fs::write(&path, text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}

fn main() -> ExitCode {
    match entrypoint() {
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
        Ok(_) => ExitCode::SUCCESS,
    }
}
