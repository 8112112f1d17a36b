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

//! View filter for the birthday list
//!
//! Derives the displayed list from the fetched records and the two
//! independent queries:
//! - Name prefix, compared case-insensitively (empty matches everything)
//! - Birth month, 1-indexed (unset or invalid means no month filtering)
//!
//! Matching records are ordered by name with a locale-aware collator.
//!
//! The derivation is pure and recomputed on every read. Nothing here is
//! cached.

use chrono::{Datelike, Month};
use icu_collator::{Collator, CollatorOptions, Strength};
use std::cmp::Ordering;
use tracing::warn;

use crate::core::types::{parse_month_query, BirthdayRecord};

/// Locale-aware name ordering
///
/// Uses the root collation at tertiary strength: accents and case only
/// matter once the base letters tie, and lowercase sorts before uppercase
/// ("amy" < "Amy" < "Émile" < "Zoe"). Names the collator considers equal
/// fall back to their raw bytes so the order is total.
pub struct NameCollator {
    /// `None` if the collation data failed to load
    collator: Option<Collator>,
}

impl Default for NameCollator {
    fn default() -> Self {
        Self::new()
    }
}

impl NameCollator {
    pub fn new() -> Self {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);

        let collator = match Collator::try_new(&Default::default(), options) {
            Ok(collator) => Some(collator),
            Err(e) => {
                warn!("Collation data unavailable, sorting by lowercase names: {}", e);
                None
            }
        };

        Self { collator }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let collated = match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => a.to_lowercase().cmp(&b.to_lowercase()),
        };

        collated.then_with(|| a.cmp(b))
    }
}

/// Compares two names with a one-off [`NameCollator`]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    NameCollator::new().compare(a, b)
}

/// Sorts records by name, ascending, in locale-aware order
pub fn sort_records(records: &mut [BirthdayRecord]) {
    let collator = NameCollator::new();
    records.sort_by(|a, b| collator.compare(&a.name, &b.name));
}

/// Filter criteria for the displayed list
///
/// # Example
///
/// ```
/// use birthday_manager::core::{BirthdayRecord, ViewFilter};
/// use chrono::NaiveDate;
///
/// let records = vec![
///     BirthdayRecord::new("1", "Alice", NaiveDate::from_ymd_opt(2000, 1, 5).unwrap(), "a@x.io"),
///     BirthdayRecord::new("2", "bob", NaiveDate::from_ymd_opt(2000, 2, 5).unwrap(), "b@x.io"),
/// ];
///
/// let visible = ViewFilter::new("al", "").apply(&records);
/// assert_eq!(visible.len(), 1);
/// assert_eq!(visible[0].name, "Alice");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewFilter {
    /// Lowercased name prefix
    name_prefix: String,
    /// Month to keep, if any
    month: Option<Month>,
}

impl ViewFilter {
    /// Builds a filter from the raw query strings held in view-state
    ///
    /// # Arguments
    ///
    /// * `name_query` - Name prefix as typed (case is ignored)
    /// * `month_query` - Month selector value, `""` for all months
    pub fn new(name_query: &str, month_query: &str) -> Self {
        Self {
            name_prefix: name_query.to_lowercase(),
            month: parse_month_query(month_query),
        }
    }

    /// Returns the month this filter keeps, if any
    pub fn month(&self) -> Option<Month> {
        self.month
    }

    /// Returns true if the record satisfies both criteria
    pub fn matches(&self, record: &BirthdayRecord) -> bool {
        let matches_name = record.name.to_lowercase().starts_with(&self.name_prefix);

        let matches_month = match self.month {
            Some(month) => record.dob.month() == month.number_from_month(),
            None => true,
        };

        matches_name && matches_month
    }

    /// Sorts a copy of the records and keeps the matching ones
    pub fn apply(&self, records: &[BirthdayRecord]) -> Vec<BirthdayRecord> {
        let mut sorted = records.to_vec();
        sort_records(&mut sorted);

        sorted
            .into_iter()
            .filter(|record| self.matches(record))
            .collect()
    }
}
