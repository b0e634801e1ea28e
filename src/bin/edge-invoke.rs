use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use edge_redirect::event::{handle_event, handle_event_json, EventError, ViewerEvent};

#[derive(Parser)]
#[command(name = "edge-invoke")]
#[command(about = "Run the www redirect handler on a viewer-request event", long_about = None)]
struct Cli {
    /// Event JSON file; reads stdin when omitted.
    #[arg(short, long)]
    event: Option<PathBuf>,

    /// Print single-line JSON instead of pretty output.
    #[arg(long)]
    compact: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "edge_redirect=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    let input = match &cli.event {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    if cli.compact {
        return Ok(handle_event_json(&input)?);
    }

    let event: ViewerEvent = serde_json::from_str(&input).map_err(EventError::from)?;
    tracing::debug!(uri = %event.request.uri, host = ?event.request.host(), "Invoking handler");

    let output = handle_event(event)?;
    Ok(serde_json::to_string_pretty(&output).map_err(EventError::Encode)?)
}
