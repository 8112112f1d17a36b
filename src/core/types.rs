// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/types.rs
//!
//! Core type definitions for birthday management
//!
//! This module defines the fundamental types used throughout the application:
//! - `RecordId`: Opaque backend identifier of a record
//! - `BirthdayRecord`: A stored birthday as returned by the backend
//! - `NewBirthday`: The payload submitted when creating a record
//! - `BirthdayForm`: Pending, not-yet-validated form input
//!
//! Records implement serialisation for the backend wire format
//! (`{ _id, name, dob, email }`).

use chrono::{DateTime, Local, Month, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Wire and display format for plain calendar dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Opaque record identifier assigned by the backend
///
/// Stable across requests. The backend may send it as a string or a
/// number; both are stored as text.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Self(text),
            RawId::Number(number) => Self(number.to_string()),
        })
    }
}

/// A birthday record owned by the backend
///
/// The UI only ever holds a read-only copy of these; it never edits one
/// in place.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct BirthdayRecord {
    /// Backend identifier (`_id` on the wire, `id` accepted too)
    #[serde(rename = "_id", alias = "id")]
    pub id: RecordId,

    /// Display name, never empty
    pub name: String,

    /// Date of birth, calendar date only
    #[serde(with = "iso_date")]
    pub dob: NaiveDate,

    /// Contact email, not validated client-side
    #[serde(default)]
    pub email: String,
}

impl BirthdayRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, dob: NaiveDate, email: impl Into<String>) -> Self {
        Self {
            id: RecordId::new(id),
            name: name.into(),
            dob,
            email: email.into(),
        }
    }
}

impl fmt::Display for BirthdayRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.dob.format(DATE_FORMAT))
    }
}

/// Payload submitted to the backend to create a record
///
/// Values are sent exactly as the user typed them.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NewBirthday {
    pub name: String,
    pub dob: String,
    pub email: String,
}

/// Pending input of the create form
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BirthdayForm {
    pub name: String,
    pub dob: String,
    pub email: String,
}

impl BirthdayForm {
    /// Resets all three fields to empty
    pub fn clear(&mut self) {
        self.name.clear();
        self.dob.clear();
        self.email.clear();
    }

    /// Returns true when no field holds any text
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.dob.is_empty() && self.email.is_empty()
    }
}

/// Parses a date of birth as sent by the backend
///
/// Accepts a plain ISO-8601 date (`2000-01-05`), a timestamp without
/// offset (taken as-is), or an RFC 3339 timestamp. Timestamps with an
/// offset are converted to the local timezone before the calendar date
/// is taken, so the month matches what the viewer sees.
///
/// # Example
///
/// ```
/// use birthday_manager::core::types::parse_dob;
/// use chrono::NaiveDate;
///
/// let dob = parse_dob("2000-01-05")?;
/// assert_eq!(dob, NaiveDate::from_ymd_opt(2000, 1, 5).unwrap());
/// # Ok::<(), chrono::ParseError>(())
/// ```
pub fn parse_dob(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Ok(date);
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.date());
    }

    DateTime::parse_from_rfc3339(raw).map(|timestamp| timestamp.with_timezone(&Local).date_naive())
}

/// Interprets a month selector value (`"1"`..`"12"`)
///
/// Anything else, including the empty "all months" value, yields `None`.
pub fn parse_month_query(query: &str) -> Option<Month> {
    let number: u8 = query.trim().parse().ok()?;
    Month::try_from(number).ok()
}

mod iso_date {
    use super::{parse_dob, DATE_FORMAT};
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_dob(&raw).map_err(|e| serde::de::Error::custom(format!("invalid dob '{}': {}", raw, e)))
    }
}
