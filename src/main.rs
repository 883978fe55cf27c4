// src/main.rs
mod batch;
mod extractors;
mod prompt;
mod session;
mod storage;
mod utils;

use batch::BatchProgress;
use clap::Parser;
use session::Session;
use std::path::PathBuf;
use storage::StorageManager;
use utils::AppError;

/// Compile `_KEYWORD.` sections from a folder of text files into one file per keyword
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Folder containing the input text files (not searched recursively)
    #[arg(short, long)]
    input_dir: PathBuf,

    /// Keyword to extract, without marker punctuation (repeatable or comma-separated).
    /// Prompted for interactively when omitted.
    #[arg(short = 'k', long = "keyword", value_delimiter = ',')]
    keywords: Vec<String>,

    /// Output folder for the compiled files (prompted for after the scan if omitted)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Extension of input and output files
    #[arg(short, long, default_value = session::DEFAULT_EXTENSION)]
    extension: String,

    /// Also write a JSON manifest describing the run
    #[arg(long)]
    manifest: bool,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::debug!("Starting with args: {:?}", args);

    let result = run(args).await;
    if let Err(e) = &result {
        tracing::error!("An error occurred: {}", e);
    }
    result
}

async fn run(args: Args) -> Result<(), AppError> {
    // 3. Build the session from flags, prompting for keywords if none were given
    let mut session = Session::new(&args.input_dir).with_extension(&args.extension);
    for keyword in &args.keywords {
        session.add_keyword(keyword)?;
    }
    if session.keywords().is_empty() {
        session = blocking(move || {
            let mut session = session;
            prompt::prompt_keywords(&mut session, &mut std::io::stdin().lock(), &mut std::io::stdout())?;
            Ok(session)
        })
        .await?;
    }
    session.validate()?;

    tracing::info!(
        "Extracting {} keywords from {}",
        session.keywords().len(),
        session.input_dir().display()
    );

    // 4. Scan on the background worker; nothing is written until it succeeds
    let report = batch::spawn_batch(session.clone())
        .finish(log_progress)
        .await?;

    // 5. Resolve the output folder only now that the scan is complete
    let output_dir = match args.output_dir {
        Some(dir) => Some(dir),
        None => {
            blocking(|| prompt::prompt_output_dir(&mut std::io::stdin().lock(), &mut std::io::stdout()))
                .await?
        }
    };
    let Some(output_dir) = output_dir else {
        tracing::warn!("Output folder not selected. Extraction cancelled.");
        return Ok(());
    };

    // 6. Write one file per keyword
    let storage = StorageManager::new(&output_dir, session.extension())?;
    storage.save_all(&report)?;
    if args.manifest {
        storage.save_manifest(&report)?;
    }

    tracing::info!("Extraction complete. Files saved in {}", output_dir.display());
    Ok(())
}

fn log_progress(progress: &BatchProgress) {
    tracing::info!(
        "[{:>3}%] {}/{} {}",
        progress.percent(),
        progress.processed,
        progress.total,
        progress.file_name
    );
}

/// Runs a stdin-bound prompt off the async runtime.
async fn blocking<T, F>(f: F) -> Result<T, AppError>
where
    F: FnOnce() -> std::io::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let value = tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::Worker(e.to_string()))??;
    Ok(value)
}
