//! LeafScan - plant disease classification client

use anyhow::Context;
use capture::ImageBlob;
use leafscan::{init_logging, App, AppConfig};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    info!("=== LeafScan Client v{} ===", env!("CARGO_PKG_VERSION"));

    let arg = match std::env::args().nth(1) {
        Some(a) => a,
        None => {
            eprintln!("Usage: leafscan <image-path> | --health");
            eprintln!("Please choose or capture an image first");
            return Ok(());
        }
    };

    let config = AppConfig::default();
    let mut app = App::new(config);

    if arg == "--health" {
        match app.health().await {
            Ok(health) => println!(
                "service {} (model loaded: {})",
                health.status, health.tflite_loaded
            ),
            Err(e) => eprintln!("health probe failed: {e}"),
        }
        return Ok(());
    }

    app.load_catalog().await;

    let blob = ImageBlob::from_file(&arg).with_context(|| format!("failed to read {arg}"))?;
    app.select_image(blob);

    println!("{}", render::render_loading());
    if let Some(markup) = app.submit().await {
        println!("{markup}");
    }

    Ok(())
}
