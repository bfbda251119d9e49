//! Person records returned by the directory's attribute query.
//!
//! The directory returns each person as an ordered sequence of attribute
//! rows. Row order is not guaranteed: the two requested attributes may
//! appear in either order, so extraction indexes the rows by attribute
//! name instead of guessing from position.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::error::PersonFieldError;

/// Attribute carrying a person's email address.
pub const ATTR_EMAIL: &str = "gpmail";

/// Attribute carrying a person's display name.
pub const ATTR_NAME: &str = "name";

/// One attribute row: a name and its ordered values.
///
/// Values are heterogeneous; only the first element is of interest here,
/// and it is expected to be a string.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonAttribute {
    /// Attribute name.
    #[serde(rename = "AttrName")]
    pub name: String,

    /// Attribute values; the first element carries the value of interest.
    #[serde(rename = "Values", default)]
    pub values: Vec<Value>,
}

/// A person record: the attribute rows the directory returned for one entry.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonRecord {
    /// Attribute rows, in whatever order the directory produced them.
    #[serde(rename = "Attrs", default)]
    pub attributes: Vec<PersonAttribute>,
}

impl PersonRecord {
    /// Extract the `(email, name)` pair from this record.
    ///
    /// Builds a name-indexed view of the rows first, then reads both
    /// attributes directly, so the result is identical whichever order the
    /// rows arrived in. A record missing either attribute, or whose first
    /// value is not a string, yields a [`PersonFieldError`]; callers skip
    /// such records rather than aborting the run.
    pub fn member_entry(&self) -> Result<(String, String), PersonFieldError> {
        let by_name: HashMap<&str, &PersonAttribute> = self
            .attributes
            .iter()
            .map(|attr| (attr.name.as_str(), attr))
            .collect();

        let email = Self::first_string(&by_name, ATTR_EMAIL)?;
        let name = Self::first_string(&by_name, ATTR_NAME)?;
        Ok((email.to_string(), name.to_string()))
    }

    /// First value of the named attribute, as a string.
    ///
    /// Fails explicitly when the value is not string-shaped instead of
    /// degrading to an empty string.
    fn first_string<'a>(
        by_name: &HashMap<&str, &'a PersonAttribute>,
        attribute: &str,
    ) -> Result<&'a str, PersonFieldError> {
        let row = by_name
            .get(attribute)
            .ok_or_else(|| PersonFieldError::MissingAttribute {
                attribute: attribute.to_string(),
            })?;

        row.values
            .first()
            .and_then(Value::as_str)
            .ok_or_else(|| PersonFieldError::NotString {
                attribute: attribute.to_string(),
            })
    }
}
