use courier_screen::location::{LocationError, LocationOutcome};
use courier_screen::model::{
    ConnectionState, Coordinate, DeliveryTime, Region, ScreenState, DEVICE_FIX_SPAN,
    FALLBACK_COORDINATE, FALLBACK_SPAN, MARKER_FOCUS_SPAN,
};
use courier_screen::ping::LocationPing;
use courier_screen::screen_actor::{self, ScreenContext, ScreenError};
use courier_screen::services::{Alert, AlertLog, MapFocusLog, RecordingTransport};
use screen_framework::ScreenHandle;
use std::sync::Arc;
use std::time::Duration;

const COURIER: Coordinate = Coordinate::new(-23.1901, -46.8812);

struct Harness {
    alerts: Arc<AlertLog>,
    map: Arc<MapFocusLog>,
    transport: Arc<RecordingTransport>,
    client: courier_screen::clients::CourierScreenClient,
    actor: tokio::task::JoinHandle<()>,
}

/// Real screen actor with in-memory collaborators.
fn spawn_screen(transport: RecordingTransport) -> Harness {
    let alerts = Arc::new(AlertLog::new());
    let map = Arc::new(MapFocusLog::new());
    let transport = Arc::new(transport);

    let (actor, client) = screen_actor::new(ScreenState::default(), 8);
    let context = ScreenContext::new(alerts.clone(), map.clone(), transport.clone());
    let actor = tokio::spawn(actor.run(context));

    Harness {
        alerts,
        map,
        transport,
        client,
        actor,
    }
}

fn device_fix() -> LocationOutcome {
    LocationOutcome::Acquired(Region::around(COURIER, DEVICE_FIX_SPAN))
}

#[tokio::test]
async fn test_screen_starts_loading_and_rejects_inputs() {
    let h = spawn_screen(RecordingTransport::succeeding());

    assert!(h.client.state().await.unwrap().is_loading());
    assert_eq!(h.client.toggle_connection().await, Err(ScreenError::NotReady));
    assert_eq!(h.client.select_marker(1).await, Err(ScreenError::NotReady));
    assert_eq!(h.client.send_location_ping().await, Err(ScreenError::NotReady));

    assert!(h.client.state().await.unwrap().is_loading());
    assert!(h.transport.sent().is_empty());
}

#[tokio::test]
async fn test_location_resolves_exactly_once() {
    let h = spawn_screen(RecordingTransport::succeeding());

    let region = h.client.resolve_location(device_fix()).await.unwrap();
    assert_eq!(region.center(), COURIER);

    let fallback = LocationOutcome::Fallback {
        region: Region::around(FALLBACK_COORDINATE, FALLBACK_SPAN),
        cause: LocationError::Unavailable("GPS off".into()),
    };
    assert_eq!(
        h.client.resolve_location(fallback).await,
        Err(ScreenError::AlreadyResolved)
    );

    let state = h.client.state().await.unwrap();
    assert_eq!(state.location(), Some(region));
    assert!(h.alerts.alerts().is_empty());
}

#[tokio::test]
async fn test_unavailable_location_alerts_with_message() {
    let h = spawn_screen(RecordingTransport::succeeding());

    h.client
        .resolve_location(LocationOutcome::Fallback {
            region: Region::around(FALLBACK_COORDINATE, FALLBACK_SPAN),
            cause: LocationError::Unavailable("Location request timed out.".into()),
        })
        .await
        .unwrap();

    assert_eq!(
        h.alerts.alerts(),
        vec![Alert::new(
            "Error",
            "Failed to get your location: Location request timed out. Make sure your location is enabled."
        )]
    );
}

#[tokio::test]
async fn test_toggle_sequence_alternates() {
    let h = spawn_screen(RecordingTransport::succeeding());
    h.client.resolve_location(device_fix()).await.unwrap();

    let mut states = Vec::new();
    for _ in 0..4 {
        states.push(h.client.toggle_connection().await.unwrap());
    }

    assert_eq!(
        states,
        vec![
            ConnectionState::Connected,
            ConnectionState::Disconnected,
            ConnectionState::Connected,
            ConnectionState::Disconnected,
        ]
    );
    let state = h.client.state().await.unwrap();
    assert_eq!(state.connection().delivery_time(), DeliveryTime::ZERO);
}

#[tokio::test]
async fn test_marker_selection_focuses_each_marker() {
    let h = spawn_screen(RecordingTransport::succeeding());
    h.client.resolve_location(device_fix()).await.unwrap();

    for id in [3, 1, 2] {
        h.client.select_marker(id).await.unwrap();
    }
    assert_eq!(h.client.select_marker(0).await, Err(ScreenError::UnknownMarker(0)));

    let centers: Vec<_> = h.map.regions().iter().map(Region::center).collect();
    assert_eq!(
        centers,
        vec![
            Coordinate::new(-23.1895, -46.9),
            Coordinate::new(-23.1885, -46.8975),
            Coordinate::new(-23.187, -46.899),
        ]
    );
    assert!(h
        .map
        .regions()
        .iter()
        .all(|r| r.span() == MARKER_FOCUS_SPAN));
}

#[tokio::test]
async fn test_failed_ping_leaves_state_unchanged() {
    let h = spawn_screen(RecordingTransport::failing("Network request failed"));
    h.client.resolve_location(device_fix()).await.unwrap();
    h.client.toggle_connection().await.unwrap();
    let before = h.client.state().await.unwrap();

    let ping = h.client.send_location_ping().await.unwrap();
    assert_eq!(ping, LocationPing::hello(COURIER));

    let alerts = tokio::time::timeout(Duration::from_secs(5), h.alerts.wait_for(1))
        .await
        .expect("ping result never alerted");
    assert_eq!(alerts, vec![Alert::new("Error", "Failed to send location.")]);

    // no retry
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(h.transport.sent().len(), 1);
    assert_eq!(h.client.state().await.unwrap(), before);
}

#[tokio::test]
async fn test_actor_stops_when_client_dropped() {
    let h = spawn_screen(RecordingTransport::succeeding());
    h.client.resolve_location(device_fix()).await.unwrap();

    let client = h.client.clone();
    drop(h.client);
    assert!(client.snapshot().await.is_ok());
    drop(client);

    tokio::time::timeout(Duration::from_secs(5), h.actor)
        .await
        .expect("actor did not stop")
        .unwrap();
}
