//! Ad Mapper: conversion from raw listing objects to [`CarRecord`].
//!
//! Amount parsing lives in [`crate::parse`]; candidate-path lookup lives in
//! [`crate::parse_helpers`]. This module only decides which paths feed which
//! output field and which defaults apply.

use carvision_core::{
    slugify, CarDetails, CarRecord, SourceInfo, DEFAULT_STATUS, DEFAULT_TITLE, SOURCE_PROVIDER,
};
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::extract::RawAd;
use crate::parse::{normalize_mileage, normalize_price};
use crate::parse_helpers::{pick, pick_owned, pick_string, FieldPath};

const ID: &[FieldPath] = &[&["id"], &["adId"], &["mobileAdId"]];
const TITLE: &[FieldPath] = &[
    &["vehicle", "modelDescription"],
    &["vehicle", "title"],
    &["title"],
    &["model"],
];
const MAKE: &[FieldPath] = &[&["vehicle", "make"], &["make"], &["manufacturer"]];
const FUEL: &[FieldPath] = &[&["vehicle", "fuel"], &["fuel"]];
const TRANSMISSION: &[FieldPath] = &[&["vehicle", "transmission"], &["transmission"]];
const FIRST_REGISTRATION: &[FieldPath] = &[
    &["vehicle", "firstRegistration"],
    &["firstRegistration"],
    &["ez"],
];
const MILEAGE: &[FieldPath] = &[&["vehicle", "mileage"], &["mileage"], &["km"]];
const PRICE: &[FieldPath] = &[
    &["price", "consumerGross"],
    &["price", "amount"],
    &["price"],
    &["preis"],
];
const STATUS: &[FieldPath] = &[&["status"], &["availability"]];
const IMAGES: &[FieldPath] = &[&["images"], &["vehicle", "images"]];
const IMAGE_URL_KEYS: [&str; 2] = ["url", "href"];

const DESCRIPTION: &[FieldPath] = &[&["description"], &["vehicle", "description"]];
const POWER_KW: &[FieldPath] = &[
    &["vehicle", "power", "kw"],
    &["vehicle", "powerKw"],
    &["powerKw"],
];
const POWER_HP: &[FieldPath] = &[
    &["vehicle", "power", "hp"],
    &["vehicle", "powerHp"],
    &["powerHp"],
];
const CUBIC_CAPACITY: &[FieldPath] = &[&["vehicle", "cubicCapacity"], &["cubicCapacity"]];
const EMISSION_CLASS: &[FieldPath] = &[&["vehicle", "emissionClass"], &["emissionClass"]];
const CO2: &[FieldPath] = &[&["vehicle", "co2Emission"], &["co2Emission"]];
const CONSUMPTION: &[FieldPath] = &[&["vehicle", "consumption"], &["consumption"]];
const DOORS: &[FieldPath] = &[&["vehicle", "doors"], &["doors"]];
const SEATS: &[FieldPath] = &[&["vehicle", "seats"], &["seats"]];
const COLOR: &[FieldPath] = &[&["vehicle", "color"], &["color"]];
const INTERIOR_COLOR: &[FieldPath] = &[&["vehicle", "interiorColor"], &["interiorColor"]];
const FEATURES: &[FieldPath] = &[&["vehicle", "features"], &["features"]];
const SELLER: &[FieldPath] = &[&["seller"], &["contact"]];
const SOURCE_URL: &[FieldPath] = &[&["url"], &["link"]];

/// Maps one raw ad to a [`CarRecord`], stamping it with the current time.
#[must_use]
pub fn map_ad(ad: &RawAd) -> CarRecord {
    map_ad_at(ad, Utc::now())
}

/// Maps one raw ad to a [`CarRecord`] using `imported_at` as the import
/// timestamp.
///
/// Never fails: missing or unusable fields fall back to `None` or to the
/// record defaults (placeholder title, `0` price and mileage, no images,
/// available status).
#[must_use]
pub fn map_ad_at(ad: &RawAd, imported_at: DateTime<Utc>) -> CarRecord {
    let title = pick_string(ad, TITLE).unwrap_or_else(|| DEFAULT_TITLE.to_owned());
    let id = pick_string(ad, ID).unwrap_or_else(|| slugify(&title));

    let price = pick(ad, PRICE).and_then(normalize_price).unwrap_or(0);
    let mileage = pick(ad, MILEAGE).and_then(normalize_mileage).unwrap_or(0);
    let status = pick_string(ad, STATUS).unwrap_or_else(|| DEFAULT_STATUS.to_owned());

    CarRecord {
        id,
        title,
        make: pick_string(ad, MAKE),
        fuel_type: pick_string(ad, FUEL),
        transmission: pick_string(ad, TRANSMISSION),
        price,
        mileage,
        first_registration: pick_string(ad, FIRST_REGISTRATION),
        status,
        images: collect_images(ad),
        details: map_details(ad, imported_at),
    }
}

fn map_details(ad: &RawAd, imported_at: DateTime<Utc>) -> CarDetails {
    CarDetails {
        description: pick_owned(ad, DESCRIPTION),
        power_kw: pick_owned(ad, POWER_KW),
        power_hp: pick_owned(ad, POWER_HP),
        cubic_capacity: pick_owned(ad, CUBIC_CAPACITY),
        emission_class: pick_owned(ad, EMISSION_CLASS),
        co2_g_km: pick_owned(ad, CO2),
        consumption: pick_owned(ad, CONSUMPTION),
        doors: pick_owned(ad, DOORS),
        seats: pick_owned(ad, SEATS),
        color: pick_owned(ad, COLOR),
        interior_color: pick_owned(ad, INTERIOR_COLOR),
        features: pick_owned(ad, FEATURES),
        seller: pick_owned(ad, SELLER),
        source: SourceInfo {
            provider: SOURCE_PROVIDER.to_owned(),
            url: pick_string(ad, SOURCE_URL),
            imported_at: format_timestamp(imported_at),
        },
    }
}

/// Image URLs from either plain strings or `{ "url" | "href": ... }` objects.
/// Entries of any other shape are skipped.
fn collect_images(ad: &RawAd) -> Vec<String> {
    let Some(Value::Array(entries)) = pick(ad, IMAGES) else {
        return Vec::new();
    };

    entries.iter().filter_map(image_url).collect()
}

fn image_url(entry: &Value) -> Option<String> {
    match entry {
        Value::String(url) => Some(url.clone()),
        Value::Object(obj) => IMAGE_URL_KEYS
            .iter()
            .filter_map(|key| obj.get(*key).and_then(Value::as_str))
            .find(|url| !url.is_empty())
            .map(str::to_owned),
        _ => None,
    }
}

/// ISO 8601, UTC, whole seconds, literal `Z`: `2025-12-29T10:15:00Z`.
pub(crate) fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
