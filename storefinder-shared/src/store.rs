//! Store record types.
//!
//! `StoreRecord` is the unit of ingestion and the unit returned by search. Its
//! JSON form is the document body stored in the search index, so the serde
//! field names here are the index field names.

use serde::{Deserialize, Serialize};

/// A business location as stored in the search index.
///
/// `store_code` identifies the record within an index and is used as the
/// engine document id. Empty strings, an empty hours list and a missing
/// location are left out of the encoded document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreRecord {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub store_code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub business_name: String,
    #[serde(rename = "address_1", default, skip_serializing_if = "String::is_empty")]
    pub address1: String,
    #[serde(rename = "address_2", default, skip_serializing_if = "String::is_empty")]
    pub address2: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub city: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub postal_code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub primary_phone: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub website: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub payment_types: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub primary_category: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub photo: String,
    /// Opening hours, in the order they were supplied.
    #[serde(rename = "store_hours", default, skip_serializing_if = "Vec::is_empty")]
    pub hours: Vec<StoreHour>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<StoreLocation>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sap_id: String,
}

impl StoreRecord {
    /// Create an otherwise empty record with the given store code.
    pub fn new(store_code: impl Into<String>) -> Self {
        Self {
            store_code: store_code.into(),
            ..Default::default()
        }
    }

    /// Set the business name.
    pub fn with_business_name(mut self, name: impl Into<String>) -> Self {
        self.business_name = name.into();
        self
    }

    /// Set the geographic location in degrees.
    pub fn with_location(mut self, lat: f64, lon: f64) -> Self {
        self.location = Some(StoreLocation { lat, lon });
        self
    }

    /// Append an opening hours entry.
    pub fn with_hour(mut self, hour: StoreHour) -> Self {
        self.hours.push(hour);
        self
    }
}

/// Opening hours for a single day. Times are free-form strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreHour {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub day_of_week: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub open_time: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub close_time: String,
}

impl StoreHour {
    pub fn new(
        day_of_week: impl Into<String>,
        open_time: impl Into<String>,
        close_time: impl Into<String>,
    ) -> Self {
        Self {
            day_of_week: day_of_week.into(),
            open_time: open_time.into(),
            close_time: close_time.into(),
        }
    }
}

/// A point in WGS84 degrees, indexed as a `geo_point`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreLocation {
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lon: f64,
}

impl StoreLocation {
    /// Whether both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}
