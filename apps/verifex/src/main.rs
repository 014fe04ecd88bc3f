use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use client_core::{load_settings, render, HttpAnalysisClient, RequestController};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod report;

use report::TextReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Submit a Python function to the Verifex analysis service and print the report.
#[derive(Parser, Debug)]
#[command(name = "verifex", version)]
struct Args {
    /// Source file to analyze; stdin is read when omitted or "-".
    file: Option<PathBuf>,
    #[arg(long)]
    server_url: Option<String>,
    /// Settings file; defaults to ./verifex.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Request timeout in seconds, 0 disables it.
    #[arg(long)]
    timeout_secs: Option<u64>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(server_url) = &args.server_url {
        settings = settings.with_server_url(server_url)?;
    }
    if let Some(secs) = args.timeout_secs {
        settings = settings.with_timeout_secs(secs);
    }

    let mut controller = RequestController::with_input(read_source(args.file.as_deref())?);
    let Some(submission) = controller.submit_input() else {
        eprintln!("nothing to analyze: the input is blank");
        return Ok(ExitCode::from(2));
    };

    let client = HttpAnalysisClient::new(&settings)?;
    info!(server_url = %settings.server_url, "submitting analysis");
    let completion = submission.dispatch(&client).await;
    controller.complete(completion);

    let view = render(controller.state());
    match args.format {
        OutputFormat::Text => print!("{}", TextReport(&view)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
    }

    Ok(if view.shows_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read source file '{}'", path.display())),
        _ => {
            let mut code = String::new();
            io::stdin()
                .read_to_string(&mut code)
                .context("failed to read source from stdin")?;
            Ok(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_file_and_flags() {
        let args = Args::parse_from([
            "verifex",
            "factorial.py",
            "--server-url",
            "http://127.0.0.1:9000",
            "--timeout-secs",
            "0",
            "--format",
            "json",
        ]);
        assert_eq!(args.file, Some(PathBuf::from("factorial.py")));
        assert_eq!(args.server_url.as_deref(), Some("http://127.0.0.1:9000"));
        assert_eq!(args.timeout_secs, Some(0));
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn defaults_to_text_on_stdin() {
        let args = Args::parse_from(["verifex"]);
        assert_eq!(args.file, None);
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn missing_source_file_reports_path() {
        let err = read_source(Some(Path::new("/nonexistent/verifex/input.py")))
            .expect_err("should fail");
        assert!(err.to_string().contains("/nonexistent/verifex/input.py"));
    }
}
