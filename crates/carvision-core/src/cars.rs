use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Title used when a listing carries no recognizable title.
pub const DEFAULT_TITLE: &str = "Fahrzeug";

/// Status used when a listing carries no status or availability field.
pub const DEFAULT_STATUS: &str = "verfügbar";

/// Status the site shows for vehicles on hold for a buyer.
pub const RESERVED_STATUS: &str = "reserviert";

/// Provider recorded in every record's provenance block.
pub const SOURCE_PROVIDER: &str = "mobile.de";

/// A vehicle listing normalized into the site's detail-file shape.
///
/// Field order matches the serialized key order of `cars/<slug>.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarRecord {
    /// Source ad id when one exists, otherwise the slugified title.
    pub id: String,
    #[serde(rename = "titel")]
    pub title: String,
    #[serde(rename = "hersteller")]
    pub make: Option<String>,
    #[serde(rename = "kraftstoff")]
    pub fuel_type: Option<String>,
    #[serde(rename = "getriebe")]
    pub transmission: Option<String>,
    /// Gross price in whole euros; `0` when the source price was unusable.
    #[serde(rename = "preis")]
    pub price: i64,
    /// Odometer reading in kilometres; `0` when unknown.
    #[serde(rename = "km")]
    pub mileage: i64,
    /// First registration as given by the source, e.g. `"03/2019"`.
    #[serde(rename = "ez")]
    pub first_registration: Option<String>,
    pub status: String,
    /// Image URLs in source order.
    #[serde(rename = "bilder")]
    pub images: Vec<String>,
    pub details: CarDetails,
}

/// Lower-priority descriptive fields kept in the source's own JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarDetails {
    pub description: Option<serde_json::Value>,
    pub power_kw: Option<serde_json::Value>,
    pub power_hp: Option<serde_json::Value>,
    pub cubic_capacity: Option<serde_json::Value>,
    pub emission_class: Option<serde_json::Value>,
    pub co2_g_km: Option<serde_json::Value>,
    pub consumption: Option<serde_json::Value>,
    pub doors: Option<serde_json::Value>,
    pub seats: Option<serde_json::Value>,
    pub color: Option<serde_json::Value>,
    pub interior_color: Option<serde_json::Value>,
    pub features: Option<serde_json::Value>,
    pub seller: Option<serde_json::Value>,
    pub source: SourceInfo,
}

/// Provenance of an imported record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    pub provider: String,
    pub url: Option<String>,
    /// UTC, second precision, e.g. `"2025-12-29T10:15:00Z"`.
    pub imported_at: String,
}

/// Overview projection of a [`CarRecord`] written to `cars.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarListItem {
    pub id: String,
    #[serde(rename = "titel")]
    pub title: String,
    #[serde(rename = "hersteller")]
    pub make: Option<String>,
    #[serde(rename = "kraftstoff")]
    pub fuel_type: Option<String>,
    #[serde(rename = "getriebe")]
    pub transmission: Option<String>,
    #[serde(rename = "preis")]
    pub price: i64,
    #[serde(rename = "km")]
    pub mileage: i64,
    #[serde(rename = "ez")]
    pub first_registration: Option<String>,
    pub status: String,
    #[serde(rename = "bilder")]
    pub images: Vec<String>,
}

impl CarRecord {
    /// Returns the list-view projection of this record.
    #[must_use]
    pub fn list_item(&self) -> CarListItem {
        CarListItem {
            id: self.id.clone(),
            title: self.title.clone(),
            make: self.make.clone(),
            fuel_type: self.fuel_type.clone(),
            transmission: self.transmission.clone(),
            price: self.price,
            mileage: self.mileage,
            first_registration: self.first_registration.clone(),
            status: self.status.clone(),
            images: self.images.clone(),
        }
    }

    /// Returns the slug used as the detail file stem.
    ///
    /// Derived from the title, or from the id when the title is empty.
    /// Two records with the same slug share one detail file.
    #[must_use]
    pub fn file_slug(&self) -> String {
        if self.title.is_empty() {
            crate::slugify(&self.id)
        } else {
            crate::slugify(&self.title)
        }
    }

    /// Rank used for listing order: available, then reserved, then the rest.
    #[must_use]
    pub fn status_rank(&self) -> u8 {
        match self.status.as_str() {
            DEFAULT_STATUS => 0,
            RESERVED_STATUS => 1,
            _ => 2,
        }
    }
}

/// Orders records the way the site's inventory page lists them.
///
/// Status rank first, then title (case-insensitive), then id. The sort is
/// stable, so fully equal keys keep their source order.
pub fn sort_for_listing(cars: &mut [CarRecord]) {
    cars.sort_by(|a, b| {
        a.status_rank()
            .cmp(&b.status_rank())
            .then_with(|| compare_titles(&a.title, &b.title))
            .then_with(|| a.id.cmp(&b.id))
    });
}

fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
#[path = "cars_test.rs"]
mod tests;
