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

//! Birthday Manager
//!
//! Keeps a list of people's birthdays on a remote REST backend and lets
//! you browse, filter, add and delete them from a terminal or a GTK4
//! window.
//!
//! # Features
//!
//! - **Live list:** Fetched on start and after every successful change
//! - **Filtering:** Case-insensitive name prefix and birth month, combined
//! - **Validated create form:** Nothing is sent until every field is filled
//! - **Confirmed deletes:** Every deletion asks first
//! - **Status notices:** Progress and outcome messages that clear themselves
//!
//! # Architecture
//!
//! - **`core`:** Records, filtering, form validation, date formatting
//! - **`config`:** Layered settings (defaults, TOML file, environment, flags)
//! - **`api`:** Backend client behind the `BirthdayApi` trait
//! - **`ui`:** Observable view-model, plus GTK4 views with the `gui` feature
//!
//! # Examples
//!
//! ## Filtering a list
//!
//! ```
//! use birthday_manager::core::{BirthdayRecord, ViewFilter};
//! use chrono::NaiveDate;
//!
//! let records = vec![
//!     BirthdayRecord::new("1", "bob", NaiveDate::from_ymd_opt(1995, 3, 2).unwrap(), ""),
//!     BirthdayRecord::new("2", "Alice", NaiveDate::from_ymd_opt(2000, 1, 5).unwrap(), ""),
//! ];
//!
//! let visible = ViewFilter::new("a", "1").apply(&records);
//! assert_eq!(visible.len(), 1);
//! assert_eq!(visible[0].name, "Alice");
//! ```
//!
//! ## Talking to the backend
//!
//! ```no_run
//! use birthday_manager::api::HttpBirthdayApi;
//! use birthday_manager::config::Settings;
//! use birthday_manager::ui::{AlwaysConfirm, BirthdayManager};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let settings = Settings::default();
//! let manager = BirthdayManager::new(HttpBirthdayApi::new(&settings)?, AlwaysConfirm, &settings);
//!
//! manager.mount().await?;
//! manager.set_name_query("al");
//! for record in manager.visible_records() {
//!     println!("{}", record);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod core;
pub mod ui;

// Re-export commonly used types for convenience
pub use core::{BirthdayForm, BirthdayRecord, NewBirthday, RecordId};
