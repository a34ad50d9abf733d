//! # Record Properties
//!
//! Tagged property values and the total extraction helpers the reminder run
//! relies on. Every helper returns a documented default instead of failing,
//! so one malformed record never stops the rest of the batch.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

pub const TITLE_PROP: &str = "title";
pub const AUTHOR_PROP: &str = "author";
pub const FIRST_DRAFT_DATE_PROP: &str = "first_draft_date";
pub const READY_BY_DATE_PROP: &str = "ready_by_date";
pub const PUBLISHING_DATE_PROP: &str = "publishing_date";

pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_AUTHOR: &str = "Unknown Author";

/// Property mapping of a single record, keyed by property name.
pub type Properties = HashMap<String, PropertyValue>;

/// One property value, discriminated by the payload's `type` field
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    Title {
        #[serde(default)]
        title: Vec<RichText>,
    },
    People {
        #[serde(default)]
        people: Vec<Person>,
    },
    Date {
        #[serde(default)]
        date: Option<DateRange>,
    },
    /// Any other property type, or a payload whose shape doesn't match its tag
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RichText {
    #[serde(default)]
    pub plain_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DateRange {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

impl PropertyValue {
    /// Convert a raw property payload. Never fails.
    pub fn from_json(value: &Value) -> Self {
        PropertyValue::deserialize(value).unwrap_or(PropertyValue::Unsupported)
    }
}

/// Parse a raw `properties` object. Anything that isn't an object yields an empty mapping.
pub fn properties_from_json(value: Option<&Value>) -> Properties {
    value
        .and_then(Value::as_object)
        .map(|map| {
            map.iter()
                .map(|(name, raw)| (name.clone(), PropertyValue::from_json(raw)))
                .collect()
        })
        .unwrap_or_default()
}

/// Plain text of the first title segment, or "Untitled".
pub fn page_title(properties: &Properties) -> String {
    match properties.get(TITLE_PROP) {
        Some(PropertyValue::Title { title }) => title
            .first()
            .and_then(|segment| segment.plain_text.clone())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        _ => DEFAULT_TITLE.to_string(),
    }
}

/// Display name of the first listed person, or "Unknown Author".
///
/// This is a human display name, not a chat user id, so the destination may
/// render it as plain text rather than an at-mention.
pub fn author_mention(properties: &Properties) -> String {
    match properties.get(AUTHOR_PROP) {
        Some(PropertyValue::People { people }) => people
            .first()
            .and_then(|person| person.name.clone())
            .unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
        _ => DEFAULT_AUTHOR.to_string(),
    }
}

/// Start date string of a date property. The end date is ignored.
pub fn date_property(properties: &Properties, name: &str) -> Option<String> {
    match properties.get(name) {
        Some(PropertyValue::Date { date: Some(range) }) => range.start.clone(),
        _ => None,
    }
}
