use std::sync::Arc;

use patrimonio_scanner::config::Config;
use patrimonio_scanner::models::{Notification, RecordDetails, ScanOutcome};
use patrimonio_scanner::services::{HttpInventoryApi, ScanSession};

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries what the operator sees
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "patrimonio_scanner=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()?;
    tracing::info!("Using inventory API at {}", config.api_base_url);

    let api = Arc::new(HttpInventoryApi::new(&config)?);
    let session = ScanSession::mount(api, config.scan_settle_delay).await;

    // Each stdin line is the payload of one camera session
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        session.open_scanner();
        let Some(report) = session.on_barcode_scanned(line.trim()).await else {
            session.close_scanner();
            continue;
        };

        match &report.outcome {
            ScanOutcome::Matched(record) => println!("{}", RecordDetails(record)),
            outcome => {
                if let Some(notification) =
                    Notification::for_outcome(outcome, session.catalog_status())
                {
                    println!("{}", notification);
                }
            }
        }

        if let Some(update) = report.status_update {
            let result = update.wait().await;
            if let Err(e) = &result {
                tracing::error!("Status update failed: {}", e);
            }
            println!("{}", Notification::for_status_update(&result));
        }
    }

    session.unmount();
    Ok(())
}
