use sharp_scene::services::worker::handle_line;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Logs go to stderr; stdout carries one JSON result per line.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    tracing::info!("Starting SHARP worker, reading job requests from stdin");

    if let Err(e) = run().await {
        tracing::error!(error = %e, "Worker stopped on I/O error");
        std::process::exit(1);
    }

    tracing::info!("Input closed, worker exiting");
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let mut processed: u64 = 0;

    while let Some(line) = lines.next_line().await? {
        let Some(result) = handle_line(&line) else {
            continue;
        };

        let mut payload = serde_json::to_vec(&result)?;
        payload.push(b'\n');
        stdout.write_all(&payload).await?;
        stdout.flush().await?;

        processed += 1;
        tracing::debug!(processed, "Result written");
    }

    Ok(())
}
