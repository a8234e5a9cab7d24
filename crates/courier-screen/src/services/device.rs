use crate::location::{LocationError, LocationService, PermissionService, PermissionStatus};
use crate::model::Coordinate;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

/// How the simulated permission dialog answers.
#[derive(Debug, Clone, PartialEq)]
pub enum PermissionReply {
    Grant,
    Deny,
    Fail(String),
}

/// A scripted device: answers the permission dialog and the position lookup the way it
/// was told to, and counts how often each was asked.
///
/// Used by the demo binary and by tests.
#[derive(Debug)]
pub struct SimulatedDevice {
    permission: PermissionReply,
    position: Result<Coordinate, String>,
    permission_requests: AtomicUsize,
    position_requests: AtomicUsize,
}

impl SimulatedDevice {
    /// A device that grants permission and reports `coordinate`.
    pub fn at(coordinate: Coordinate) -> Self {
        Self {
            permission: PermissionReply::Grant,
            position: Ok(coordinate),
            permission_requests: AtomicUsize::new(0),
            position_requests: AtomicUsize::new(0),
        }
    }

    pub fn deny_permission(mut self) -> Self {
        self.permission = PermissionReply::Deny;
        self
    }

    pub fn fail_permission(mut self, message: impl Into<String>) -> Self {
        self.permission = PermissionReply::Fail(message.into());
        self
    }

    pub fn fail_position(mut self, message: impl Into<String>) -> Self {
        self.position = Err(message.into());
        self
    }

    pub fn permission_requests(&self) -> usize {
        self.permission_requests.load(Ordering::SeqCst)
    }

    pub fn position_requests(&self) -> usize {
        self.position_requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PermissionService for SimulatedDevice {
    async fn request_fine_location(&self) -> Result<PermissionStatus, LocationError> {
        self.permission_requests.fetch_add(1, Ordering::SeqCst);
        debug!(reply = ?self.permission, "Permission requested");
        match &self.permission {
            PermissionReply::Grant => Ok(PermissionStatus::Granted),
            PermissionReply::Deny => Ok(PermissionStatus::Denied),
            PermissionReply::Fail(message) => Err(LocationError::Unavailable(message.clone())),
        }
    }
}

#[async_trait]
impl LocationService for SimulatedDevice {
    async fn current_position(&self) -> Result<Coordinate, LocationError> {
        self.position_requests.fetch_add(1, Ordering::SeqCst);
        self.position
            .clone()
            .map_err(LocationError::Unavailable)
    }
}
