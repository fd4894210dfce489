use anyhow::{Context, Result, bail};
use clap::Parser;
use osobna_extract::upload::encode_image_file;
use serde_json::{Value, json};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "osobna-post",
    version,
    about = "Send an ID card photo to the extraction service"
)]
struct Cli {
    /// Image file to send (jpg, png or gif)
    #[arg(default_value = "proba_slike.jpg")]
    image: PathBuf,

    /// Extraction service URL
    #[arg(short, long, default_value = "http://localhost:8787")]
    url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let image = encode_image_file(&cli.image)
        .await
        .with_context(|| format!("Image encoding failed for {}", cli.image.display()))?;
    debug!("Encoded {} into {} chars", cli.image.display(), image.len());

    info!("Posting image to {}", cli.url);
    let response = reqwest::Client::new()
        .post(&cli.url)
        .json(&json!({ "image": image }))
        .send()
        .await
        .context("Request to the extraction service failed")?;

    let status = response.status();
    let body = response
        .text()
        .await
        .context("Failed to read the service response")?;

    if !status.is_success() {
        bail!("Service answered {}: {}", status, body);
    }

    let result: Value =
        serde_json::from_str(&body).context("Service response is not valid JSON")?;

    println!("Worker Response:");
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
