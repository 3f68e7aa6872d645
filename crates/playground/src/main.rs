//! WebGAL playground CLI binary.

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use webgal_playground::cli::Cli;

/// Main entry point for the playground CLI.
///
/// Uses tokio's current_thread runtime; parsing is CPU-bound and short, and
/// the only I/O is reading scripts and the preferences file.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr so JSON on stdout stays clean.
    // Example: RUST_LOG=webgal_playground=debug,scene_locate=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("webgal_playground=info,scene_locate=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting webgal-playground");

    let cli = Cli::parse_args();
    cli.execute().await?;

    tracing::debug!("webgal-playground completed successfully");
    Ok(())
}
