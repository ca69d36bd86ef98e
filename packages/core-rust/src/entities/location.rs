//! Campus location records for the map widget.

use serde::{Deserialize, Serialize};

/// The kind of campus location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    /// Academic or administrative building.
    Building,
    /// Dining hall or food court.
    Dining,
    /// Library or study space.
    Library,
    /// Parking structure or lot.
    Parking,
}

/// Availability of a campus location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationStatus {
    /// Open as posted. The default.
    #[default]
    Open,
    /// Closed to students.
    Closed,
    /// Open with restrictions (reduced hours, capacity limits).
    Limited,
}

/// Grid position on the campus map widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Horizontal grid position.
    pub x: f64,
    /// Vertical grid position.
    pub y: f64,
}

/// A point of interest on the campus map.
///
/// The only entity kind without a creation timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampusLocation {
    /// Unique identity, assigned at creation.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Location kind.
    #[serde(rename = "type")]
    pub kind: LocationType,
    /// Map grid position.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub coordinates: Option<Coordinates>,
    /// Current availability.
    pub status: LocationStatus,
    /// Short blurb shown on the map card.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    /// Posted hours as display text, e.g. `"6 AM - 10 PM"`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub hours: Option<String>,
}

/// Create input for [`CampusLocation`].
///
/// `status` defaults to [`LocationStatus::Open`] when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCampusLocation {
    /// Display name.
    pub name: String,
    /// Location kind.
    #[serde(rename = "type")]
    pub kind: LocationType,
    /// Map grid position.
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    /// Current availability; the store defaults this to open.
    #[serde(default)]
    pub status: Option<LocationStatus>,
    /// Short blurb shown on the map card.
    #[serde(default)]
    pub description: Option<String>,
    /// Posted hours as display text.
    #[serde(default)]
    pub hours: Option<String>,
}
