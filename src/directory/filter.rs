use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::record::Record;

/// A record field the user can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Name,
    Username,
    Email,
    Phone,
}

impl FilterField {
    /// All filterable fields in display order.
    pub const ALL: [FilterField; 4] = [
        FilterField::Name,
        FilterField::Username,
        FilterField::Email,
        FilterField::Phone,
    ];

    /// Stable lowercase key, as used on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            FilterField::Name => "name",
            FilterField::Username => "username",
            FilterField::Email => "email",
            FilterField::Phone => "phone",
        }
    }

    /// Column heading.
    pub fn label(self) -> &'static str {
        match self {
            FilterField::Name => "Name",
            FilterField::Username => "Username",
            FilterField::Email => "Email",
            FilterField::Phone => "Phone",
        }
    }

    /// Next field in display order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            FilterField::Name => FilterField::Username,
            FilterField::Username => FilterField::Email,
            FilterField::Email => FilterField::Phone,
            FilterField::Phone => FilterField::Name,
        }
    }

    /// Previous field in display order, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            FilterField::Name => FilterField::Phone,
            FilterField::Username => FilterField::Name,
            FilterField::Email => FilterField::Username,
            FilterField::Phone => FilterField::Email,
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown filter field '{0}' (expected name, username, email or phone)")]
pub struct UnknownFilterField(pub String);

impl FromStr for FilterField {
    type Err = UnknownFilterField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterField::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownFilterField(s.to_string()))
    }
}

/// Current text constraint for each filterable field.
///
/// An empty pattern means "no constraint" for that field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    name: String,
    username: String,
    email: String,
    phone: String,
}

impl FilterSet {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Name => &self.name,
            FilterField::Username => &self.username,
            FilterField::Email => &self.email,
            FilterField::Phone => &self.phone,
        }
    }

    /// Overwrite the pattern for one field.
    pub fn set(&mut self, field: FilterField, value: String) {
        let slot = match field {
            FilterField::Name => &mut self.name,
            FilterField::Username => &mut self.username,
            FilterField::Email => &mut self.email,
            FilterField::Phone => &mut self.phone,
        };
        *slot = value;
    }

    /// True when no field carries a pattern.
    pub fn is_empty(&self) -> bool {
        FilterField::ALL
            .into_iter()
            .all(|field| self.get(field).is_empty())
    }

    /// Whether `record` satisfies every field's pattern.
    pub fn matches(&self, record: &Record) -> bool {
        FilterField::ALL
            .into_iter()
            .all(|field| field_matches(record.field(field), self.get(field)))
    }

    /// The subsequence of `records` matching this filter set, order preserved.
    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}

fn field_matches(value: Option<&str>, pattern: &str) -> bool {
    if pattern.is_empty() {
        return true;
    }
    match value {
        Some(value) => value.to_lowercase().contains(&pattern.to_lowercase()),
        None => false,
    }
}
