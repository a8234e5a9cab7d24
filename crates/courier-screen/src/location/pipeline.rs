use super::{LocationError, LocationService, PermissionService, PermissionStatus, Platform};
use crate::config::ScreenConfig;
use crate::model::{
    LocationSource, Region, Span, DEVICE_FIX_SPAN, FALLBACK_COORDINATE, FALLBACK_SPAN,
};
use tracing::{debug, info, instrument, warn};

/// The single terminal result of location acquisition.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationOutcome {
    /// Live device fix framed with the tight span.
    Acquired(Region),
    /// The fallback region, plus what went wrong.
    Fallback { region: Region, cause: LocationError },
}

impl LocationOutcome {
    pub const fn region(&self) -> Region {
        match self {
            LocationOutcome::Acquired(region) => *region,
            LocationOutcome::Fallback { region, .. } => *region,
        }
    }

    pub const fn source(&self) -> LocationSource {
        match self {
            LocationOutcome::Acquired(_) => LocationSource::Device,
            LocationOutcome::Fallback { .. } => LocationSource::Fallback,
        }
    }

    pub const fn cause(&self) -> Option<&LocationError> {
        match self {
            LocationOutcome::Acquired(_) => None,
            LocationOutcome::Fallback { cause, .. } => Some(cause),
        }
    }
}

/// Permission-then-locate pipeline.
///
/// Runs once. There is no retry, no timeout and no second permission request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationPipeline {
    pub platform: Platform,
    pub fallback: Region,
    pub device_span: Span,
}

impl Default for LocationPipeline {
    fn default() -> Self {
        Self::new(Platform::default())
    }
}

impl LocationPipeline {
    pub const fn new(platform: Platform) -> Self {
        Self {
            platform,
            fallback: Region::around(FALLBACK_COORDINATE, FALLBACK_SPAN),
            device_span: DEVICE_FIX_SPAN,
        }
    }

    pub fn from_config(config: &ScreenConfig) -> Self {
        Self {
            platform: config.platform,
            fallback: config.fallback_region(),
            device_span: config.device_span,
        }
    }

    /// Runs both steps and folds any failure into the fallback outcome.
    #[instrument(skip_all, fields(platform = ?self.platform))]
    pub async fn acquire(
        &self,
        permissions: &dyn PermissionService,
        locator: &dyn LocationService,
    ) -> LocationOutcome {
        match self.locate(permissions, locator).await {
            Ok(region) => {
                info!(
                    latitude = region.latitude,
                    longitude = region.longitude,
                    "Location acquired"
                );
                LocationOutcome::Acquired(region)
            }
            Err(cause) => {
                warn!(error = %cause, "Using fallback location");
                LocationOutcome::Fallback {
                    region: self.fallback,
                    cause,
                }
            }
        }
    }

    async fn locate(
        &self,
        permissions: &dyn PermissionService,
        locator: &dyn LocationService,
    ) -> Result<Region, LocationError> {
        if self.platform.requires_permission() {
            debug!("Requesting fine location permission");
            match permissions.request_fine_location().await? {
                PermissionStatus::Granted => debug!("Permission granted"),
                PermissionStatus::Denied => return Err(LocationError::PermissionDenied),
            }
        }

        let coordinate = locator.current_position().await?;
        Ok(Region::around(coordinate, self.device_span))
    }
}

/// Runs the default pipeline for `platform`.
pub async fn acquire_location(
    platform: Platform,
    permissions: &dyn PermissionService,
    locator: &dyn LocationService,
) -> LocationOutcome {
    LocationPipeline::new(platform)
        .acquire(permissions, locator)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Coordinate;
    use crate::services::SimulatedDevice;

    const HOME: Coordinate = Coordinate::new(-23.19, -46.88);

    #[tokio::test]
    async fn test_android_granted_uses_device_fix() {
        let device = SimulatedDevice::at(HOME);
        let outcome = acquire_location(Platform::Android, &device, &device).await;

        assert_eq!(
            outcome,
            LocationOutcome::Acquired(Region::around(HOME, DEVICE_FIX_SPAN))
        );
        assert_eq!(outcome.source(), LocationSource::Device);
        assert_eq!(device.permission_requests(), 1);
    }

    #[tokio::test]
    async fn test_android_denied_falls_back_without_locating() {
        let device = SimulatedDevice::at(HOME).deny_permission();
        let outcome = acquire_location(Platform::Android, &device, &device).await;

        assert_eq!(outcome.region(), Region::around(FALLBACK_COORDINATE, FALLBACK_SPAN));
        assert_eq!(outcome.cause(), Some(&LocationError::PermissionDenied));
        assert_eq!(device.position_requests(), 0);
    }

    #[tokio::test]
    async fn test_permission_request_error_falls_back() {
        let device = SimulatedDevice::at(HOME).fail_permission("dialog crashed");
        let outcome = acquire_location(Platform::Android, &device, &device).await;

        assert_eq!(outcome.source(), LocationSource::Fallback);
        assert_eq!(
            outcome.cause(),
            Some(&LocationError::Unavailable("dialog crashed".to_string()))
        );
    }

    #[tokio::test]
    async fn test_position_error_falls_back() {
        let device = SimulatedDevice::at(HOME).fail_position("No location provider available.");
        let outcome = acquire_location(Platform::Android, &device, &device).await;

        assert_eq!(outcome.region().center(), FALLBACK_COORDINATE);
        assert!(matches!(outcome.cause(), Some(LocationError::Unavailable(_))));
        assert_eq!(device.position_requests(), 1);
    }

    #[tokio::test]
    async fn test_ios_skips_permission_step() {
        let device = SimulatedDevice::at(HOME).deny_permission();
        let outcome = acquire_location(Platform::Ios, &device, &device).await;

        assert_eq!(outcome.source(), LocationSource::Device);
        assert_eq!(device.permission_requests(), 0);
    }

    #[tokio::test]
    async fn test_custom_fallback_and_span() {
        let pipeline = LocationPipeline {
            platform: Platform::Android,
            fallback: Region::around(Coordinate::new(1.0, 2.0), Span::new(3.0, 4.0)),
            device_span: Span::new(0.5, 0.5),
        };
        let device = SimulatedDevice::at(HOME).deny_permission();
        let outcome = pipeline.acquire(&device, &device).await;
        assert_eq!(outcome.region().span(), Span::new(3.0, 4.0));

        let device = SimulatedDevice::at(HOME);
        let outcome = pipeline.acquire(&device, &device).await;
        assert_eq!(outcome.region().span(), Span::new(0.5, 0.5));
    }
}
