//! # Records Feature
//!
//! Content records read from the Notion database, with defensive field extraction.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Tagged property values replace raw JSON lookups
//! - 1.0.0: Initial release with Notion database query

pub mod property;
pub mod source;

pub use property::{author_mention, date_property, page_title, Properties, PropertyValue};
pub use source::{NotionClient, Record, RecordPage, RecordSource};
