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

//! Birthday backend integration
//!
//! The backend is an external REST service exposing three endpoints:
//!
//! | Method   | Path                          | Body / response              |
//! |----------|-------------------------------|------------------------------|
//! | `GET`    | `/api/get-birthdays`          | `{ "data": [record, ...] }`  |
//! | `POST`   | `/api/add-birthday`           | `{ name, dob, email }`       |
//! | `DELETE` | `/api/delete-birthday/{id}`   | status only                  |
//!
//! Any non-2xx status is a failure. List entries that do not decode are
//! logged and skipped. The [`BirthdayApi`] trait is the seam
//! the view-model talks to, so tests can swap in an in-memory backend.
//!
//! # Example
//! ```no_run
//! use birthday_manager::api::{BirthdayApi, HttpBirthdayApi};
//! use birthday_manager::config::Settings;
//!
//! # async fn example() -> Result<(), birthday_manager::api::ApiError> {
//! let api = HttpBirthdayApi::new(&Settings::default())?;
//! let records = api.list().await?;
//! println!("{} birthdays", records.len());
//! # Ok(())
//! # }
//! ```

mod http;

pub use http::HttpBirthdayApi;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::core::{BirthdayRecord, NewBirthday, RecordId};

pub const LIST_PATH: [&str; 2] = ["api", "get-birthdays"];
pub const CREATE_PATH: [&str; 2] = ["api", "add-birthday"];
pub const DELETE_PATH: [&str; 2] = ["api", "delete-birthday"];

/// Errors returned by backend calls
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, timeout or other transport failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Backend answered with a non-2xx status
    #[error("Backend returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// Response body did not match the expected shape
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Base address cannot have path segments appended
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Body of `GET /api/get-birthdays`
///
/// Entries are kept as raw JSON so one malformed record does not fail
/// the whole list.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ListResponse {
    pub data: Vec<serde_json::Value>,
}

impl ListResponse {
    /// Decodes every entry, skipping (and logging) the ones that fail
    pub fn into_records(self) -> Vec<BirthdayRecord> {
        self.data
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value(entry) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("Skipping malformed birthday at index {}: {}", index, e);
                    None
                }
            })
            .collect()
    }
}

/// Operations the view-model needs from the backend
///
/// Futures are not required to be `Send`: the view-model drives them on a
/// single UI context.
#[allow(async_fn_in_trait)]
pub trait BirthdayApi {
    /// Fetches every record, in server order
    async fn list(&self) -> Result<Vec<BirthdayRecord>, ApiError>;

    /// Creates a record; only success or failure is reported
    async fn create(&self, birthday: &NewBirthday) -> Result<(), ApiError>;

    /// Deletes the record with the given identifier
    async fn delete(&self, id: &RecordId) -> Result<(), ApiError>;
}
