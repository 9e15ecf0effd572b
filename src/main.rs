use anyhow::Result;
use hyrule_assistant::app::App;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hyrule_assistant=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting hyrule-assistant");

    let mut stdout = std::io::stdout();
    match App::new(&mut stdout) {
        Ok(mut app) => match app.run().await {
            Ok(()) => Ok(()),
            Err(e) => {
                error!("Session loop failed: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    }
}
