use crate::clients::CourierScreenClient;
use crate::config::ScreenConfig;
use crate::location::{LocationPipeline, LocationService, PermissionService};
use crate::model::{Region, ScreenState};
use crate::ping::PingTransport;
use crate::screen_actor::{self, ScreenContext, ScreenError};
use crate::services::{MapView, Notifier};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The host collaborators a running screen needs.
#[derive(Clone)]
pub struct CourierServices {
    pub permissions: Arc<dyn PermissionService>,
    pub locator: Arc<dyn LocationService>,
    pub notifier: Arc<dyn Notifier>,
    pub map_view: Arc<dyn MapView>,
    pub transport: Arc<dyn PingTransport>,
}

/// A running courier screen.
///
/// `CourierApp` is responsible for:
/// - **Lifecycle Management**: starting the screen actor and stopping it again
/// - **Location Bootstrap**: running the location pipeline once and delivering its
///   outcome to the actor as a single event
///
/// # Example
///
/// ```ignore
/// let mut app = CourierApp::start(&ScreenConfig::default(), services);
/// let region = app.wait_until_ready().await?;
/// app.client.toggle_connection().await?;
/// app.shutdown().await?;
/// ```
pub struct CourierApp {
    /// Client for interacting with the screen actor
    pub client: CourierScreenClient,

    actor_task: JoinHandle<()>,
    location_task: Option<JoinHandle<()>>,
}

impl CourierApp {
    /// Spawns the screen actor in the loading state, then spawns the location pipeline
    /// that moves it to ready.
    pub fn start(config: &ScreenConfig, services: CourierServices) -> Self {
        let CourierServices {
            permissions,
            locator,
            notifier,
            map_view,
            transport,
        } = services;

        let (actor, client) =
            screen_actor::new(ScreenState::default(), config.mailbox_capacity);
        let context = ScreenContext::new(notifier, map_view, transport).with_config(config);
        let actor_task = tokio::spawn(actor.run(context));

        let pipeline = LocationPipeline::from_config(config);
        let resolver = client.clone();
        let location_task = tokio::spawn(async move {
            let outcome = pipeline
                .acquire(permissions.as_ref(), locator.as_ref())
                .await;
            if let Err(e) = resolver.resolve_location(outcome).await {
                error!(error = %e, "Failed to deliver location");
            }
        });

        info!(platform = ?config.platform, "Courier screen started");
        Self {
            client,
            actor_task,
            location_task: Some(location_task),
        }
    }

    /// Waits for the location pipeline to finish and returns the map region.
    pub async fn wait_until_ready(&mut self) -> Result<Region, ScreenError> {
        if let Some(task) = self.location_task.take() {
            task.await.map_err(|e| {
                ScreenError::ActorCommunication(format!("Location task failed: {e}"))
            })?;
        }
        self.client
            .state()
            .await?
            .location()
            .ok_or(ScreenError::NotReady)
    }

    /// Stops the screen.
    ///
    /// A location pipeline that is still running is cancelled first, since it holds a
    /// client. Then the last client is dropped and the actor task is awaited.
    pub async fn shutdown(mut self) -> Result<(), String> {
        info!("Shutting down courier screen...");

        if let Some(task) = self.location_task.take() {
            task.abort();
            let _ = task.await;
        }
        drop(self.client);

        if let Err(e) = self.actor_task.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("Courier screen shutdown complete.");
        Ok(())
    }
}
