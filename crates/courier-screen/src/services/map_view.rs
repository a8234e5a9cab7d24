use crate::model::Region;
use std::sync::Mutex;
use tracing::info;

/// The map widget's programmatic camera.
pub trait MapView: Send + Sync {
    fn animate_to_region(&self, region: Region);
}

/// Map view that logs every camera move and remembers it.
#[derive(Debug, Default)]
pub struct MapFocusLog {
    regions: Mutex<Vec<Region>>,
}

impl MapFocusLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn regions(&self) -> Vec<Region> {
        self.regions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn last(&self) -> Option<Region> {
        self.regions().last().copied()
    }
}

impl MapView for MapFocusLog {
    fn animate_to_region(&self, region: Region) {
        info!(
            latitude = region.latitude,
            longitude = region.longitude,
            latitude_delta = region.latitude_delta,
            "Animate to region"
        );
        self.regions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(region);
    }
}
