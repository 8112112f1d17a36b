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

//! HTTP implementation of [`BirthdayApi`] on top of `reqwest`

use reqwest::{Client, Response, Url};
use tracing::debug;

use super::{ApiError, BirthdayApi, ListResponse, CREATE_PATH, DELETE_PATH, LIST_PATH};
use crate::config::Settings;
use crate::core::{BirthdayRecord, NewBirthday, RecordId};

/// REST client for the birthday backend
///
/// Cheap to clone: `reqwest::Client` shares its connection pool.
#[derive(Clone, Debug)]
pub struct HttpBirthdayApi {
    client: Client,
    base_url: Url,
}

impl HttpBirthdayApi {
    /// Creates a client for the backend named in `settings`
    ///
    /// # Returns
    ///
    /// * `Ok(HttpBirthdayApi)` - Client ready to use
    /// * `Err(ApiError::InvalidBaseUrl)` - Base address unusable
    /// * `Err(ApiError::Request)` - TLS backend failed to initialise
    pub fn new(settings: &Settings) -> Result<Self, ApiError> {
        let base_url = Url::parse(&settings.api_base_url)
            .map_err(|_| ApiError::InvalidBaseUrl(settings.api_base_url.clone()))?;

        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(settings.api_base_url.clone()));
        }

        let client = Client::builder()
            .timeout(settings.request_timeout)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Appends path segments to the base address, percent-encoding each
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Turns a non-2xx response into `ApiError::Status`
fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
            url: response.url().to_string(),
        })
    }
}

impl BirthdayApi for HttpBirthdayApi {
    async fn list(&self) -> Result<Vec<BirthdayRecord>, ApiError> {
        let url = self.endpoint(&LIST_PATH)?;
        debug!("GET {}", url);

        let response = check_status(self.client.get(url).send().await?)?;
        let body = response.bytes().await?;
        let list: ListResponse = serde_json::from_slice(&body)?;

        Ok(list.into_records())
    }

    async fn create(&self, birthday: &NewBirthday) -> Result<(), ApiError> {
        let url = self.endpoint(&CREATE_PATH)?;
        debug!("POST {}", url);

        check_status(self.client.post(url).json(birthday).send().await?)?;
        Ok(())
    }

    async fn delete(&self, id: &RecordId) -> Result<(), ApiError> {
        let [api, delete] = DELETE_PATH;
        let url = self.endpoint(&[api, delete, id.as_str()])?;
        debug!("DELETE {}", url);

        check_status(self.client.delete(url).send().await?)?;
        Ok(())
    }
}
