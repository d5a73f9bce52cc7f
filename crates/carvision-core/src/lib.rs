pub mod cars;
pub mod config;
pub mod slug;

pub use cars::{
    sort_for_listing, CarDetails, CarListItem, CarRecord, SourceInfo, DEFAULT_STATUS,
    DEFAULT_TITLE, RESERVED_STATUS, SOURCE_PROVIDER,
};
pub use config::{ConfigError, ImportConfig, DEFAULT_OUT_DIR, DETAIL_DIR_NAME, LIST_FILE_NAME};
pub use slug::{slugify, SLUG_PLACEHOLDER};
