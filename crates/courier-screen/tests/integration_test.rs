use courier_screen::config::ScreenConfig;
use courier_screen::lifecycle::{CourierApp, CourierServices};
use courier_screen::location::Platform;
use courier_screen::model::{
    ConnectionState, Coordinate, LocationSource, Region, Span, DEVICE_FIX_SPAN,
    FALLBACK_COORDINATE, FALLBACK_SPAN,
};
use courier_screen::ping::{HttpPingTransport, LocationPing, PingTransport};
use courier_screen::screen_actor::ScreenError;
use courier_screen::services::{
    Alert, AlertLog, MapFocusLog, RecordingTransport, SimulatedDevice,
};
use courier_screen::view::{Color, NO_DELIVERY};
use std::sync::Arc;
use std::time::Duration;

const COURIER: Coordinate = Coordinate::new(-23.1877, -46.8952);

struct Host {
    device: Arc<SimulatedDevice>,
    alerts: Arc<AlertLog>,
    map: Arc<MapFocusLog>,
}

fn start(
    config: &ScreenConfig,
    device: SimulatedDevice,
    transport: Arc<dyn PingTransport>,
) -> (CourierApp, Host) {
    let device = Arc::new(device);
    let alerts = Arc::new(AlertLog::new());
    let map = Arc::new(MapFocusLog::new());
    let services = CourierServices {
        permissions: device.clone(),
        locator: device.clone(),
        notifier: alerts.clone(),
        map_view: map.clone(),
        transport,
    };
    (
        CourierApp::start(config, services),
        Host { device, alerts, map },
    )
}

/// Inputs sent before the location event is applied are refused, not queued.
#[tokio::test]
async fn test_inputs_before_location_are_rejected() {
    let transport = Arc::new(RecordingTransport::succeeding());
    let (mut app, host) = start(
        &ScreenConfig::default(),
        SimulatedDevice::at(COURIER),
        transport.clone(),
    );

    assert_eq!(app.client.toggle_connection().await, Err(ScreenError::NotReady));
    assert_eq!(app.client.select_marker(1).await, Err(ScreenError::NotReady));
    assert_eq!(app.client.send_location_ping().await, Err(ScreenError::NotReady));
    assert!(host.map.regions().is_empty());

    app.wait_until_ready().await.unwrap();
    let state = app.client.toggle_connection().await.unwrap();
    assert_eq!(state, ConnectionState::Connected);
    assert!(transport.sent().is_empty());

    app.shutdown().await.unwrap();
}

/// Full end-to-end run on Android with the permission granted.
#[tokio::test]
async fn test_full_courier_screen_flow() {
    let transport = Arc::new(RecordingTransport::succeeding());
    let (mut app, host) = start(
        &ScreenConfig::default(),
        SimulatedDevice::at(COURIER),
        transport.clone(),
    );

    let region = app.wait_until_ready().await.expect("screen never became ready");
    assert_eq!(region, Region::around(COURIER, DEVICE_FIX_SPAN));
    assert_eq!(host.device.permission_requests(), 1);

    // Initial map
    let view = app.client.view().await.unwrap();
    let map = view.as_map().expect("map should be showing");
    assert_eq!(map.delivery_card, NO_DELIVERY);
    assert_eq!(map.location_pin.coordinate, COURIER);
    assert_eq!(map.markers.iter().map(|m| m.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(map.connection_button.label, "Connect");

    // Go online
    let state = app.client.toggle_connection().await.unwrap();
    assert_eq!(state, ConnectionState::Connected);
    let view = app.client.view().await.unwrap();
    assert_eq!(view.as_map().unwrap().connection_button.color, Color::Red);

    // Focus a delivery
    let focused = app.client.select_marker(2).await.unwrap();
    assert_eq!(host.map.last(), Some(focused));

    // Report location
    let ping = app.client.send_location_ping().await.unwrap();
    let alerts = tokio::time::timeout(Duration::from_secs(5), host.alerts.wait_for(1))
        .await
        .unwrap();
    assert_eq!(alerts, vec![Alert::new("Success", "Location sent successfully!")]);
    assert_eq!(transport.sent(), vec![ping]);

    app.shutdown().await.expect("shutdown failed");
}

#[tokio::test]
async fn test_permission_denied_falls_back_with_alert() {
    let (mut app, host) = start(
        &ScreenConfig::default(),
        SimulatedDevice::at(COURIER).deny_permission(),
        Arc::new(RecordingTransport::succeeding()),
    );

    let region = app.wait_until_ready().await.unwrap();

    assert_eq!(region, Region::around(FALLBACK_COORDINATE, FALLBACK_SPAN));
    assert_eq!(host.device.position_requests(), 0);
    assert_eq!(
        host.alerts.alerts(),
        vec![Alert::new(
            "Permission Denied",
            "Location permission is required to show your current location on the map."
        )]
    );
    let state = app.client.state().await.unwrap();
    assert_eq!(state.location_source(), Some(LocationSource::Fallback));

    app.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_every_failure_path_reaches_ready() {
    let devices = vec![
        SimulatedDevice::at(COURIER).deny_permission(),
        SimulatedDevice::at(COURIER).fail_permission("permission dialog unavailable"),
        SimulatedDevice::at(COURIER).fail_position("Location request timed out."),
    ];

    for device in devices {
        let (mut app, host) = start(
            &ScreenConfig::default(),
            device,
            Arc::new(RecordingTransport::succeeding()),
        );

        let region = app.wait_until_ready().await.unwrap();
        assert_eq!(region.center(), FALLBACK_COORDINATE);
        assert_eq!(host.alerts.alerts().len(), 1);
        app.shutdown().await.unwrap();
    }
}

#[tokio::test]
async fn test_ios_does_not_ask_for_permission() {
    let config = ScreenConfig {
        platform: Platform::Ios,
        ..ScreenConfig::default()
    };
    let (mut app, host) = start(
        &config,
        SimulatedDevice::at(COURIER).deny_permission(),
        Arc::new(RecordingTransport::succeeding()),
    );

    assert_eq!(app.wait_until_ready().await.unwrap().center(), COURIER);
    assert_eq!(host.device.permission_requests(), 0);

    app.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unreachable_server_alerts_and_keeps_state() {
    let transport = Arc::new(HttpPingTransport::new("http://127.0.0.1:1/api/send-message"));
    let (mut app, host) = start(
        &ScreenConfig::default(),
        SimulatedDevice::at(COURIER),
        transport,
    );
    app.wait_until_ready().await.unwrap();
    app.client.toggle_connection().await.unwrap();
    let before = app.client.state().await.unwrap();

    let ping = app.client.send_location_ping().await.unwrap();
    assert_eq!(ping, LocationPing::hello(COURIER));

    let alerts = tokio::time::timeout(Duration::from_secs(10), host.alerts.wait_for(1))
        .await
        .expect("ping failure never alerted");
    assert_eq!(alerts, vec![Alert::new("Error", "Failed to send location.")]);
    assert_eq!(app.client.state().await.unwrap(), before);

    app.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_config_drives_fallback_and_ping() {
    let config = ScreenConfig::from_toml_str(
        r#"
        ping_message = "On my way"

        [fallback_coordinate]
        latitude = 10.0
        longitude = 20.0

        [fallback_span]
        latitude_delta = 1.0
        longitude_delta = 2.0
        "#,
    )
    .unwrap();
    let transport = Arc::new(RecordingTransport::succeeding());
    let (mut app, _host) = start(
        &config,
        SimulatedDevice::at(COURIER).fail_position("No location provider available."),
        transport.clone(),
    );

    let region = app.wait_until_ready().await.unwrap();
    assert_eq!(region.center(), Coordinate::new(10.0, 20.0));
    assert_eq!(region.span(), Span::new(1.0, 2.0));

    let ping = app.client.send_location_ping().await.unwrap();
    assert_eq!(ping.message, "On my way");
    assert_eq!(ping.latitude, 10.0);

    app.shutdown().await.unwrap();
}
