//! linemark CLI - format plain text into an HTML document

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use linemark::{Error, Options};
use log::debug;

/// Format plain text into a self-contained HTML document.
#[derive(Debug, Parser)]
#[command(name = "linemark", version, about)]
struct Cli {
    /// Input text file; reads stdin when omitted or `-`
    input: Option<PathBuf>,

    /// Write the result here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Emit only the block markup, without the document shell
    #[arg(long)]
    body_only: bool,

    /// Copy line content verbatim instead of HTML-escaping it
    #[arg(long)]
    allow_html: bool,

    /// Document title (overrides the config file)
    #[arg(long, value_name = "TITLE")]
    title: Option<String>,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("linemark: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let options = options(cli)?;
    let input = read_input(cli.input.as_ref())?;

    let output = if cli.body_only {
        linemark::format_body(&input, &options)
    } else {
        linemark::format_with_options(&input, &options)
    };
    debug!("writing {} bytes", output.len());

    match &cli.output {
        Some(path) => fs::write(path, &output).map_err(|e| Error::io(path.display().to_string(), e)),
        None => io::stdout()
            .write_all(output.as_bytes())
            .map_err(|e| Error::io("<stdout>", e)),
    }
}

/// Config file values, then command-line overrides.
fn options(cli: &Cli) -> Result<Options, Error> {
    let mut options = match &cli.config {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    if let Some(title) = &cli.title {
        options.document_title = title.clone();
    }
    if cli.allow_html {
        options.allow_html = true;
    }
    Ok(options)
}

fn read_input(path: Option<&PathBuf>) -> Result<String, Error> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            fs::read_to_string(path).map_err(|e| Error::io(path.display().to_string(), e))
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| Error::io("<stdin>", e))?;
            Ok(buf)
        }
    }
}
