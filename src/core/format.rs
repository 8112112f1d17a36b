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

//! Display helpers shared by the CLI and the GTK4 views

use chrono::{Month, NaiveDate};

/// Label of the "no month filter" selector entry
pub const ALL_MONTHS_LABEL: &str = "All Months";

/// Formats a date of birth as a long date, e.g. "5 January 2000"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

/// Returns the selector entries as `(value, label)` pairs
///
/// The first entry is the empty "all months" value, followed by the twelve
/// months in calendar order with values `"1"`..`"12"`.
pub fn month_options() -> Vec<(String, String)> {
    let mut options = vec![(String::new(), ALL_MONTHS_LABEL.to_string())];

    let mut month = Month::January;
    for _ in 0..12 {
        options.push((month.number_from_month().to_string(), month.name().to_string()));
        month = month.succ();
    }

    options
}
