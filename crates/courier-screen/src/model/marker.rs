use super::geo::{Coordinate, Region, Span};
use crate::view::{Color, MarkerDescriptor};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

/// A delivery point shown on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryMarker {
    /// Caller-assigned, unique within a [`MarkerSet`].
    pub id: u32,
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    /// Display-only estimate in minutes. Never recalculated.
    pub estimated_time: u32,
}

impl DeliveryMarker {
    pub fn new(
        id: u32,
        latitude: f64,
        longitude: f64,
        title: impl Into<String>,
        estimated_time: u32,
    ) -> Self {
        Self {
            id,
            latitude,
            longitude,
            title: title.into(),
            estimated_time,
        }
    }

    pub const fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// What the map view needs to draw this marker.
    pub fn descriptor(&self) -> MarkerDescriptor {
        MarkerDescriptor {
            id: self.id,
            coordinate: self.coordinate(),
            title: self.title.clone(),
            description: format!("Delivery {}", self.id),
            color: Color::Red,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum MarkerError {
    #[error("Duplicate marker id: {0}")]
    DuplicateId(u32),
}

/// Fixed, ordered list of delivery markers.
///
/// There is no way to add, remove or edit a marker once the set exists. Clones share the
/// same storage.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSet {
    markers: Arc<[DeliveryMarker]>,
}

impl MarkerSet {
    /// Builds a set from caller-assigned markers, keeping their order.
    pub fn new(markers: Vec<DeliveryMarker>) -> Result<Self, MarkerError> {
        let mut seen = HashSet::with_capacity(markers.len());
        for marker in &markers {
            if !seen.insert(marker.id) {
                return Err(MarkerError::DuplicateId(marker.id));
            }
        }
        Ok(Self {
            markers: markers.into(),
        })
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeliveryMarker> {
        self.markers.iter()
    }

    pub fn ids(&self) -> Vec<u32> {
        self.markers.iter().map(|m| m.id).collect()
    }

    pub fn get(&self, id: u32) -> Option<&DeliveryMarker> {
        self.markers.iter().find(|m| m.id == id)
    }

    /// Region the map animates to when marker `id` is selected.
    pub fn focus_region(&self, id: u32, span: Span) -> Option<Region> {
        self.get(id).map(|m| Region::around(m.coordinate(), span))
    }

    pub fn descriptors(&self) -> Vec<MarkerDescriptor> {
        self.markers.iter().map(DeliveryMarker::descriptor).collect()
    }
}

impl Default for MarkerSet {
    /// The three deliveries the screen ships with.
    fn default() -> Self {
        Self {
            markers: Arc::from(vec![
                DeliveryMarker::new(1, -23.1885, -46.8975, "Delivery #1 - Street A", 15),
                DeliveryMarker::new(2, -23.187, -46.899, "Delivery #2 - Street B", 20),
                DeliveryMarker::new(3, -23.1895, -46.9, "Delivery #3 - Street C", 25),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MARKER_FOCUS_SPAN;

    #[test]
    fn test_default_set_has_three_stable_ids() {
        let markers = MarkerSet::default();
        assert_eq!(markers.len(), 3);
        assert_eq!(markers.ids(), vec![1, 2, 3]);
        assert_eq!(markers.get(2).unwrap().title, "Delivery #2 - Street B");
        assert_eq!(markers.get(3).unwrap().estimated_time, 25);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let result = MarkerSet::new(vec![
            DeliveryMarker::new(7, 0.0, 0.0, "a", 1),
            DeliveryMarker::new(7, 1.0, 1.0, "b", 2),
        ]);
        assert_eq!(result, Err(MarkerError::DuplicateId(7)));
    }

    #[test]
    fn test_focus_region_uses_marker_coordinate() {
        let markers = MarkerSet::default();
        let region = markers.focus_region(1, MARKER_FOCUS_SPAN).unwrap();
        assert_eq!(region.center(), Coordinate::new(-23.1885, -46.8975));
        assert_eq!(region.latitude_delta, 0.05);
        assert_eq!(region.longitude_delta, 0.05);
        assert!(markers.focus_region(99, MARKER_FOCUS_SPAN).is_none());
    }

    #[test]
    fn test_descriptor_is_red_with_delivery_description() {
        let descriptor = MarkerSet::default().get(3).unwrap().descriptor();
        assert_eq!(descriptor.description, "Delivery 3");
        assert_eq!(descriptor.color, Color::Red);
        assert_eq!(descriptor.coordinate, Coordinate::new(-23.1895, -46.9));
    }

    #[test]
    fn test_clones_share_storage() {
        let markers = MarkerSet::default();
        let copy = markers.clone();
        assert!(Arc::ptr_eq(&markers.markers, &copy.markers));
    }
}
