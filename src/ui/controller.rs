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

//! MVC Controller - observable view-model between the backend and the views
//!
//! # Responsibilities
//!
//! - Fetch records on mount and after every successful mutation
//! - Validate and submit the create form
//! - Confirm and submit deletions
//! - Derive the sorted, filtered list on every read
//! - Own the busy flag and the auto-clearing status message
//!
//! # Architecture
//!
//! All view-state lives in a `tokio::sync::watch` channel. Every mutation
//! goes through the sender, which wakes every subscribed view; views call
//! [`BirthdayManager::subscribe`] and re-render on change. The controller
//! knows nothing about GTK4 or the terminal.
//!
//! `records` is only ever replaced by a successful fetch. Create and delete
//! never patch it locally.

use std::cell::{Cell, RefCell};
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::api::{ApiError, BirthdayApi};
use crate::config::Settings;
use crate::core::{validate_form, BirthdayForm, BirthdayRecord, RecordId, ValidationError, ViewFilter};

pub const MSG_MISSING_FIELDS: &str = "Please enter all fields.";
pub const MSG_ADDING: &str = "Adding birthday...";
pub const MSG_ADDED: &str = "Birthday added successfully!";
pub const MSG_ADD_FAILED: &str = "Error adding birthday.";
pub const MSG_DELETING: &str = "Deleting birthday...";
pub const MSG_DELETED: &str = "Birthday deleted successfully!";
pub const MSG_DELETE_FAILED: &str = "Error deleting birthday.";

/// Question asked before every deletion
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this birthday?";

/// Yes/no decision provider used by the delete handler
///
/// GTK4 answers with an alert dialog, the CLI with a terminal prompt,
/// tests with a scripted answer.
#[allow(async_fn_in_trait)]
pub trait Confirm {
    async fn confirm(&self, prompt: &str) -> bool;
}

/// Confirmation that always answers yes (`--yes` on the CLI)
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    async fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Tone of a status message, used by views for styling
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StatusKind {
    /// Request in progress
    Progress,
    Success,
    Error,
}

/// Transient user-facing notice
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

/// Everything a view needs to render
#[derive(Clone, Debug, Default)]
pub struct ViewState {
    /// Pending create form input
    pub form: BirthdayForm,
    /// Records from the last successful fetch, server order
    pub records: Vec<BirthdayRecord>,
    /// Name prefix filter
    pub name_query: String,
    /// Month selector value, `""` for all months
    pub month_query: String,
    /// True while a create or delete request is outstanding
    pub is_busy: bool,
    /// Current notice, cleared automatically
    pub status: Option<StatusMessage>,
    /// Bumped on every status change; a clear timer only fires for its own
    status_generation: u64,
}

impl ViewState {
    /// Sorted and filtered records, recomputed on each call
    pub fn visible_records(&self) -> Vec<BirthdayRecord> {
        ViewFilter::new(&self.name_query, &self.month_query).apply(&self.records)
    }

    /// Status text, if a notice is showing
    pub fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(|status| status.text.as_str())
    }

    fn set_status(&mut self, kind: StatusKind, text: &str) -> u64 {
        self.status_generation = self.status_generation.wrapping_add(1);
        self.status = Some(StatusMessage {
            kind,
            text: text.to_string(),
        });
        self.status_generation
    }
}

/// Why a create or delete action did not complete
#[derive(Debug, Error)]
pub enum ActionError {
    /// Another create/delete request is still outstanding
    #[error("Another request is still in progress")]
    Busy,

    /// Form failed validation; nothing was sent
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// Backend request failed
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Observable view-model for the birthday list
///
/// Generic over the backend and the confirmation capability so both can
/// be replaced in tests.
///
/// Handlers must run inside a Tokio runtime context: the status clear
/// timer is a spawned task.
pub struct BirthdayManager<A, C> {
    /// Backend client
    api: A,
    /// Delete confirmation provider
    confirm: C,
    /// Observable view-state
    state: Arc<watch::Sender<ViewState>>,
    /// How long a status message stays visible
    status_clear_delay: Duration,
    /// Pending status clear, aborted when superseded
    clear_task: RefCell<Option<JoinHandle<()>>>,
    /// Set by the first `mount`
    mounted: Cell<bool>,
}

impl<A: BirthdayApi, C: Confirm> BirthdayManager<A, C> {
    /// Creates a view-model using the delay from `settings`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use birthday_manager::api::HttpBirthdayApi;
    /// use birthday_manager::config::Settings;
    /// use birthday_manager::ui::{AlwaysConfirm, BirthdayManager};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let settings = Settings::default();
    /// let manager = BirthdayManager::new(HttpBirthdayApi::new(&settings)?, AlwaysConfirm, &settings);
    /// manager.mount().await?;
    /// println!("{} birthdays", manager.visible_records().len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(api: A, confirm: C, settings: &Settings) -> Self {
        Self::with_status_delay(api, confirm, settings.status_clear_delay)
    }

    /// Creates a view-model with an explicit status clear delay
    pub fn with_status_delay(api: A, confirm: C, status_clear_delay: Duration) -> Self {
        let (state, _) = watch::channel(ViewState::default());

        Self {
            api,
            confirm,
            state: Arc::new(state),
            status_clear_delay,
            clear_task: RefCell::new(None),
            mounted: Cell::new(false),
        }
    }

    /// Returns the backend client
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Returns a receiver that is notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    /// Returns a copy of the current state
    pub fn snapshot(&self) -> ViewState {
        self.state.borrow().clone()
    }

    pub fn is_busy(&self) -> bool {
        self.state.borrow().is_busy
    }

    pub fn status_text(&self) -> Option<String> {
        self.state.borrow().status_text().map(str::to_string)
    }

    pub fn records(&self) -> Vec<BirthdayRecord> {
        self.state.borrow().records.clone()
    }

    pub fn form(&self) -> BirthdayForm {
        self.state.borrow().form.clone()
    }

    /// Sorted and filtered records for display
    ///
    /// Recomputed from the current records and queries on every call.
    pub fn visible_records(&self) -> Vec<BirthdayRecord> {
        self.state.borrow().visible_records()
    }

    pub fn set_form_name(&self, value: impl Into<String>) {
        let value = value.into();
        self.update_if_changed(|state| replace_if_changed(&mut state.form.name, value));
    }

    pub fn set_form_dob(&self, value: impl Into<String>) {
        let value = value.into();
        self.update_if_changed(|state| replace_if_changed(&mut state.form.dob, value));
    }

    pub fn set_form_email(&self, value: impl Into<String>) {
        let value = value.into();
        self.update_if_changed(|state| replace_if_changed(&mut state.form.email, value));
    }

    pub fn set_name_query(&self, value: impl Into<String>) {
        let value = value.into();
        self.update_if_changed(|state| replace_if_changed(&mut state.name_query, value));
    }

    /// Sets the month selector value (`""` for all months, `"1"`..`"12"`)
    pub fn set_month_query(&self, value: impl Into<String>) {
        let value = value.into();
        self.update_if_changed(|state| replace_if_changed(&mut state.month_query, value));
    }

    /// Fetches the initial list; later calls do nothing
    pub async fn mount(&self) -> Result<(), ApiError> {
        if self.mounted.replace(true) {
            debug!("Already mounted, skipping initial fetch");
            return Ok(());
        }

        self.refresh().await.map(|_| ())
    }

    /// Replaces `records` with the backend's current list
    ///
    /// On failure `records` is left untouched and the error is logged.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of records loaded
    /// * `Err(ApiError)` - Fetch failed
    pub async fn refresh(&self) -> Result<usize, ApiError> {
        match self.api.list().await {
            Ok(records) => {
                let count = records.len();
                self.state.send_modify(|state| state.records = records);
                info!("Fetched {} birthdays", count);
                Ok(count)
            }
            Err(e) => {
                error!("Error fetching birthdays: {}", e);
                Err(e)
            }
        }
    }

    /// Validates the form and creates a record
    ///
    /// On success the list is re-fetched and the form cleared. On failure
    /// the form keeps what the user typed. Either way the busy flag is
    /// reset and the status message clears itself after the delay.
    pub async fn submit(&self) -> Result<(), ActionError> {
        if self.is_busy() {
            debug!("Submit ignored while busy");
            return Err(ActionError::Busy);
        }

        let payload = match validate_form(&self.form()) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Please enter all fields ({})", e);
                self.show_status(StatusKind::Error, MSG_MISSING_FIELDS);
                return Err(e.into());
            }
        };

        self.begin_action(MSG_ADDING);

        match self.api.create(&payload).await {
            Ok(()) => {
                info!("Added birthday for {}", payload.name);
                // Refresh failures are logged by refresh itself
                let _ = self.refresh().await;
                self.state.send_modify(|state| state.form.clear());
                self.finish_action(StatusKind::Success, MSG_ADDED);
                Ok(())
            }
            Err(e) => {
                error!("Error adding birthday: {}", e);
                self.finish_action(StatusKind::Error, MSG_ADD_FAILED);
                Err(e.into())
            }
        }
    }

    /// Deletes a record after explicit confirmation
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - Record deleted and list re-fetched
    /// * `Ok(false)` - User declined; nothing was sent or changed
    /// * `Err(ActionError)` - Busy, or the backend request failed
    pub async fn delete(&self, id: &RecordId) -> Result<bool, ActionError> {
        if self.is_busy() {
            debug!("Delete ignored while busy");
            return Err(ActionError::Busy);
        }

        if !self.confirm.confirm(DELETE_PROMPT).await {
            debug!("Delete of {} cancelled", id);
            return Ok(false);
        }

        self.begin_action(MSG_DELETING);

        match self.api.delete(id).await {
            Ok(()) => {
                info!("Deleted birthday {}", id);
                let _ = self.refresh().await;
                self.finish_action(StatusKind::Success, MSG_DELETED);
                Ok(true)
            }
            Err(e) => {
                error!("Error deleting birthday: {}", e);
                self.finish_action(StatusKind::Error, MSG_DELETE_FAILED);
                Err(e.into())
            }
        }
    }

    /// Marks a request as in flight
    fn begin_action(&self, text: &str) {
        self.state.send_modify(|state| {
            state.is_busy = true;
            state.set_status(StatusKind::Progress, text);
        });
        self.cancel_status_clear();
    }

    /// Marks the request as settled and schedules the status clear
    fn finish_action(&self, kind: StatusKind, text: &str) {
        let mut generation = 0;
        self.state.send_modify(|state| {
            state.is_busy = false;
            generation = state.set_status(kind, text);
        });
        self.schedule_status_clear(generation);
    }

    /// Shows a notice that clears itself after the delay
    fn show_status(&self, kind: StatusKind, text: &str) {
        let mut generation = 0;
        self.state.send_modify(|state| generation = state.set_status(kind, text));
        self.schedule_status_clear(generation);
    }

    /// Clears the status after the delay unless a newer one replaced it
    fn schedule_status_clear(&self, generation: u64) {
        let state = Arc::clone(&self.state);
        let delay = self.status_clear_delay;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            state.send_if_modified(|state| {
                if state.status_generation == generation && state.status.is_some() {
                    state.status = None;
                    true
                } else {
                    false
                }
            });
        });

        if let Some(previous) = self.clear_task.replace(Some(handle)) {
            previous.abort();
        }
    }

    fn cancel_status_clear(&self) {
        if let Some(previous) = self.clear_task.take() {
            previous.abort();
        }
    }

    fn update_if_changed(&self, modify: impl FnOnce(&mut ViewState) -> bool) {
        self.state.send_if_modified(modify);
    }
}

impl<A, C> Drop for BirthdayManager<A, C> {
    fn drop(&mut self) {
        if let Some(task) = self.clear_task.get_mut().take() {
            task.abort();
        }
    }
}

fn replace_if_changed(slot: &mut String, value: String) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}
