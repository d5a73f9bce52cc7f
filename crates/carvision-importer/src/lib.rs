//! Vehicle inventory importer.
//!
//! Turns a mobile.de export (or any array of ad objects) into the site's
//! `cars.json` list view and `cars/<slug>.json` detail files. The stages run
//! strictly in order and nothing touches the output directory until the
//! input has been loaded, recognized and mapped.

pub mod error;
pub mod extract;
pub mod load;
pub mod normalize;
pub mod parse;
pub(crate) mod parse_helpers;
pub mod writer;

use std::path::PathBuf;

use carvision_core::{sort_for_listing, CarRecord, ImportConfig};

pub use error::{ImportError, InputFault};
pub use extract::{extract_ads, RawAd};
pub use load::load_document;
pub use normalize::{map_ad, map_ad_at};
pub use parse::{normalize_mileage, normalize_price, parse_amount};
pub use writer::{detail_path, write_output, WriteReport};

/// Outcome of one [`run_import`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    /// Records mapped from the input.
    pub imported: usize,
    /// Distinct detail files written (fewer than `imported` on slug collisions).
    pub detail_files: usize,
    /// Stale detail files removed by `--clear`.
    pub cleared: usize,
    pub slug_collisions: usize,
    pub list_path: PathBuf,
    pub detail_dir: PathBuf,
    /// `true` when nothing was written.
    pub dry_run: bool,
}

impl std::fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verb = if self.dry_run { "would import" } else { "imported" };
        write!(
            f,
            "OK: {verb} {} cars → {} and {}/",
            self.imported,
            self.list_path.display(),
            self.detail_dir.display()
        )?;
        if self.slug_collisions > 0 {
            write!(f, " ({} overwritten by duplicate slugs)", self.slug_collisions)?;
        }
        Ok(())
    }
}

/// Maps every ad in an already-parsed export document.
///
/// # Errors
///
/// Returns [`ImportError::UnrecognizedFormat`] if the document shape is not
/// recognized.
pub fn map_document(document: &serde_json::Value) -> Result<Vec<CarRecord>, ImportError> {
    let ads = extract_ads(document)?;
    Ok(ads.into_iter().map(map_ad).collect())
}

/// Runs a full import as described by `config`.
///
/// Load, extract and map all finish before the output directory is touched,
/// so malformed or unrecognized input leaves existing output unchanged.
///
/// # Errors
///
/// Returns [`ImportError::Config`] for invalid options,
/// [`ImportError::MalformedInput`] for unreadable or invalid JSON,
/// [`ImportError::UnrecognizedFormat`] for unknown document shapes and
/// [`ImportError::Io`] for filesystem failures while writing.
pub fn run_import(config: &ImportConfig) -> Result<ImportSummary, ImportError> {
    config.validate()?;

    let document = load_document(&config.input)?;
    let mut cars = map_document(&document)?;
    if config.sort {
        sort_for_listing(&mut cars);
    }

    let list_path = config.list_path();
    let detail_dir = config.detail_dir();

    if config.dry_run {
        tracing::info!(records = cars.len(), "dry run, skipping writes");
        return Ok(ImportSummary {
            imported: cars.len(),
            detail_files: 0,
            cleared: 0,
            slug_collisions: 0,
            list_path,
            detail_dir,
            dry_run: true,
        });
    }

    let report = write_output(&cars, &list_path, &detail_dir, config.clear)?;

    Ok(ImportSummary {
        imported: cars.len(),
        detail_files: report.detail_files,
        cleared: report.cleared,
        slug_collisions: report.slug_collisions,
        list_path,
        detail_dir,
        dry_run: false,
    })
}
