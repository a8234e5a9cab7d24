use clap::Parser;
use courier_screen::cli::Cli;
use courier_screen::lifecycle::{CourierApp, CourierServices};
use courier_screen::ping::HttpPingTransport;
use courier_screen::services::{AlertLog, MapFocusLog};
use courier_screen::view::ScreenView;
use screen_framework::tracing::setup_tracing;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let cli = Cli::parse();
    let config = cli.load_config().map_err(|e| e.to_string())?;

    let device = Arc::new(cli.simulated_device());
    let alerts = Arc::new(AlertLog::new());
    let services = CourierServices {
        permissions: device.clone(),
        locator: device,
        notifier: alerts.clone(),
        map_view: Arc::new(MapFocusLog::new()),
        transport: Arc::new(HttpPingTransport::new(config.ping_endpoint.clone())),
    };

    let mut app = CourierApp::start(&config, services);

    let region = app
        .wait_until_ready()
        .instrument(tracing::info_span!("location"))
        .await
        .map_err(|e| e.to_string())?;
    info!(
        latitude = region.latitude,
        longitude = region.longitude,
        "Map ready"
    );

    for _ in 0..cli.toggles {
        let state = app
            .client
            .toggle_connection()
            .await
            .map_err(|e| e.to_string())?;
        info!(?state, "Connection toggled");
    }

    if let Some(id) = cli.select {
        match app.client.select_marker(id).await {
            Ok(region) => info!(
                id,
                latitude = region.latitude,
                longitude = region.longitude,
                "Marker focused"
            ),
            Err(e) => error!(id, error = %e, "Marker selection failed"),
        }
    }

    if cli.ping {
        let seen = alerts.alerts().len();
        let span = tracing::info_span!("location_ping");
        async {
            let ping = app
                .client
                .send_location_ping()
                .await
                .map_err(|e| e.to_string())?;
            info!(endpoint = %config.ping_endpoint, ?ping, "Ping dispatched");

            // the ping itself has no timeout; the demo just stops waiting for it
            if tokio::time::timeout(Duration::from_secs(15), alerts.wait_for(seen + 1))
                .await
                .is_err()
            {
                warn!("No ping result yet, continuing");
            }
            Ok::<(), String>(())
        }
        .instrument(span)
        .await?;
    }

    match app.client.view().await.map_err(|e| e.to_string())? {
        ScreenView::Loading => info!("Screen still loading"),
        ScreenView::Map(map) => info!(
            delivery_card = %map.delivery_card,
            button = %map.connection_button.label,
            markers = map.markers.len(),
            "Screen rendered"
        ),
    }

    app.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
