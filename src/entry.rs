//! Validation for new timeline entries.
//!
//! Raw input is checked field by field before anything reaches the store.
//! Either every field is valid and exactly one [`Activity`] comes out, or
//! each failing field gets its own error and nothing is created.

use std::fmt;

use jiff::Zoned;
use jiff::civil::Date;
use url::Url;

use crate::model::{Activity, ActivityId};

/// A form field that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Date,
    Link,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Title => "title",
            Self::Date => "date",
            Self::Link => "link",
        })
    }
}

impl Field {
    /// How the field is named in a "required" message.
    fn required_label(self) -> &'static str {
        match self {
            Self::Title => "Activity title",
            Self::Date => "Date",
            Self::Link => "Link",
        }
    }
}

/// Why a single field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{} is required", .0.required_label())]
    Required(Field),

    #[error("Please enter a date as YYYY-MM-DD")]
    InvalidDate,

    #[error("Please enter a valid URL")]
    InvalidUrl,
}

/// Every field that failed, in form order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors(Vec<(Field, ValidationError)>);

impl FieldErrors {
    pub fn iter(&self) -> impl Iterator<Item = &(Field, ValidationError)> {
        self.0.iter()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, error)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{field}: {error}")?;
        }
        Ok(())
    }
}

/// Raw, unvalidated input for a new activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryForm {
    pub title: String,
    pub date: String,
    pub link: String,
}

impl Default for EntryForm {
    /// An empty form with the date preset to today.
    fn default() -> Self {
        Self {
            title: String::new(),
            date: Zoned::now().date().to_string(),
            link: String::new(),
        }
    }
}

/// Input that passed validation, ready to become an activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidEntry {
    pub title: String,
    pub date: Date,
    pub link: Option<String>,
}

impl EntryForm {
    /// Checks every field, reporting all failures at once.
    pub fn validate(&self) -> Result<ValidEntry, FieldErrors> {
        let mut errors = Vec::new();

        let title = self.title.trim();
        if title.is_empty() {
            errors.push((Field::Title, ValidationError::Required(Field::Title)));
        }

        let date = match self.date.trim() {
            "" => {
                errors.push((Field::Date, ValidationError::Required(Field::Date)));
                None
            }
            raw => {
                let date = raw.parse::<Date>().ok();
                if date.is_none() {
                    errors.push((Field::Date, ValidationError::InvalidDate));
                }
                date
            }
        };

        let link = match self.link.trim() {
            "" => None,
            raw if Url::parse(raw).is_ok() => Some(raw.to_string()),
            _ => {
                errors.push((Field::Link, ValidationError::InvalidUrl));
                None
            }
        };

        match date {
            Some(date) if errors.is_empty() => Ok(ValidEntry {
                title: title.to_string(),
                date,
                link,
            }),
            _ => Err(FieldErrors(errors)),
        }
    }
}

impl ValidEntry {
    /// Assigns a fresh id and produces the activity.
    pub fn into_activity(self) -> Activity {
        Activity {
            id: ActivityId::generate(),
            title: self.title,
            date: self.date,
            link: self.link,
        }
    }
}
