//! Property type and listing status enumerations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of real-estate asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    /// Detached or semi-detached house.
    House,
    /// Unit in a multi-unit building.
    Apartment,
    /// Undeveloped plot.
    Land,
    /// Office, retail or industrial space.
    Commercial,
}

impl PropertyType {
    /// Return the type as stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::House => "house",
            Self::Apartment => "apartment",
            Self::Land => "land",
            Self::Commercial => "commercial",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Listing status of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PropertyStatus {
    /// On the market.
    #[default]
    Available,
    /// Under offer.
    Reserved,
    /// Sold; terminal.
    Sold,
    /// Let to a tenant.
    Rented,
}

impl PropertyStatus {
    /// Return the status as stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Reserved => "reserved",
            Self::Sold => "sold",
            Self::Rented => "rented",
        }
    }

    /// Whether a property in this status may move to `next`.
    ///
    /// A sold property keeps its status.
    pub fn can_transition_to(&self, next: PropertyStatus) -> bool {
        match self {
            Self::Sold => next == Self::Sold,
            _ => true,
        }
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
