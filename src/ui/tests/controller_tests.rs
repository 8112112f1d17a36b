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

//! Controller tests
//!
//! Drives the view-model against an in-memory backend and a scripted
//! confirmation, so every request the handlers send can be counted.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use chrono::NaiveDate;
use tokio::sync::Notify;

use crate::api::{ApiError, BirthdayApi};
use crate::core::{BirthdayRecord, NewBirthday, RecordId, ValidationError};
use crate::ui::controller::*;

const CLEAR_DELAY: Duration = Duration::from_secs(2);

/// In-memory backend that records every call
#[derive(Default)]
struct FakeApi {
    records: RefCell<Vec<BirthdayRecord>>,
    list_calls: Cell<usize>,
    created: RefCell<Vec<NewBirthday>>,
    deleted: RefCell<Vec<RecordId>>,
    next_id: Cell<u32>,
    fail_list: Cell<bool>,
    fail_mutations: Cell<bool>,
    /// When set, create and delete wait for a notification before answering
    gate: RefCell<Option<Rc<Notify>>>,
}

impl FakeApi {
    fn with_records(records: Vec<BirthdayRecord>) -> Self {
        Self {
            records: RefCell::new(records),
            next_id: Cell::new(100),
            ..Self::default()
        }
    }

    fn gated(self, gate: Rc<Notify>) -> Self {
        *self.gate.borrow_mut() = Some(gate);
        self
    }

    fn list_calls(&self) -> usize {
        self.list_calls.get()
    }

    async fn wait_for_gate(&self) {
        let gate = self.gate.borrow().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
    }

    fn failure(path: &str) -> ApiError {
        ApiError::Status {
            status: 500,
            url: format!("http://fake{}", path),
        }
    }
}

impl BirthdayApi for FakeApi {
    async fn list(&self) -> Result<Vec<BirthdayRecord>, ApiError> {
        self.list_calls.set(self.list_calls.get() + 1);
        if self.fail_list.get() {
            return Err(Self::failure("/api/get-birthdays"));
        }
        Ok(self.records.borrow().clone())
    }

    async fn create(&self, birthday: &NewBirthday) -> Result<(), ApiError> {
        self.wait_for_gate().await;
        self.created.borrow_mut().push(birthday.clone());
        if self.fail_mutations.get() {
            return Err(Self::failure("/api/add-birthday"));
        }

        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let dob = crate::core::parse_dob(&birthday.dob).unwrap();
        self.records.borrow_mut().push(BirthdayRecord::new(
            id.to_string(),
            birthday.name.clone(),
            dob,
            birthday.email.clone(),
        ));
        Ok(())
    }

    async fn delete(&self, id: &RecordId) -> Result<(), ApiError> {
        self.wait_for_gate().await;
        self.deleted.borrow_mut().push(id.clone());
        if self.fail_mutations.get() {
            return Err(Self::failure("/api/delete-birthday"));
        }
        self.records.borrow_mut().retain(|record| &record.id != id);
        Ok(())
    }
}

/// Confirmation with a fixed answer that remembers what it was asked
struct ScriptedConfirm {
    answer: bool,
    prompts: Rc<RefCell<Vec<String>>>,
}

impl ScriptedConfirm {
    fn answering(answer: bool) -> (Self, Rc<RefCell<Vec<String>>>) {
        let prompts = Rc::new(RefCell::new(Vec::new()));
        let confirm = Self {
            answer,
            prompts: Rc::clone(&prompts),
        };
        (confirm, prompts)
    }
}

impl Confirm for ScriptedConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.answer
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Helper: Two records in non-alphabetical server order
fn sample_records() -> Vec<BirthdayRecord> {
    vec![
        BirthdayRecord::new("1", "bob", date(1995, 3, 2), "bob@example.com"),
        BirthdayRecord::new("2", "Alice", date(2000, 1, 5), "alice@example.com"),
    ]
}

fn manager(api: FakeApi, answer: bool) -> BirthdayManager<FakeApi, ScriptedConfirm> {
    let (confirm, _) = ScriptedConfirm::answering(answer);
    BirthdayManager::with_status_delay(api, confirm, CLEAR_DELAY)
}

fn fill_form<A: BirthdayApi, C: Confirm>(
    manager: &BirthdayManager<A, C>,
    name: &str,
    dob: &str,
    email: &str,
) {
    manager.set_form_name(name);
    manager.set_form_dob(dob);
    manager.set_form_email(email);
}

// ============================================================================
// Mount and refresh
// ============================================================================

#[tokio::test]
async fn test_mount_fetches_exactly_once() {
    let manager = manager(FakeApi::with_records(sample_records()), true);

    manager.mount().await.unwrap();
    manager.mount().await.unwrap();

    assert_eq!(manager.api().list_calls(), 1, "Mount should fetch once");
    assert_eq!(manager.records(), sample_records());
    assert!(!manager.is_busy());
    assert_eq!(manager.status_text(), None);
}

#[tokio::test]
async fn test_mount_failure_leaves_list_empty() {
    let api = FakeApi::with_records(sample_records());
    api.fail_list.set(true);
    let manager = manager(api, true);

    assert!(manager.mount().await.is_err());
    assert!(manager.records().is_empty());
    assert_eq!(manager.status_text(), None, "Fetch errors are only logged");
}

#[tokio::test]
async fn test_refresh_failure_keeps_previous_records() {
    let manager = manager(FakeApi::with_records(sample_records()), true);
    manager.mount().await.unwrap();

    manager.api().records.borrow_mut().clear();
    manager.api().fail_list.set(true);

    assert!(manager.refresh().await.is_err());
    assert_eq!(manager.records(), sample_records());
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_submit_with_missing_field_sends_nothing() {
    let cases = [
        ("", "2000-01-05", "a@x.com"),
        ("Alice", "", "a@x.com"),
        ("Alice", "2000-01-05", ""),
        ("   ", "2000-01-05", "a@x.com"),
    ];

    for (name, dob, email) in cases {
        let manager = manager(FakeApi::default(), true);
        fill_form(&manager, name, dob, email);

        let result = manager.submit().await;

        assert!(
            matches!(result, Err(ActionError::Invalid(ValidationError::MissingField(_)))),
            "Expected validation error for ({:?}, {:?}, {:?}), got: {:?}",
            name,
            dob,
            email,
            result
        );
        assert!(manager.api().created.borrow().is_empty());
        assert_eq!(manager.api().list_calls(), 0);
        assert_eq!(manager.status_text().as_deref(), Some(MSG_MISSING_FIELDS));
        assert!(!manager.is_busy());
        assert_eq!(manager.form().name, name, "Form should keep its input");
    }
}

#[tokio::test]
async fn test_submit_sends_values_verbatim_then_refreshes() {
    let manager = manager(FakeApi::with_records(sample_records()), true);
    manager.mount().await.unwrap();
    fill_form(&manager, "Carol ", "1990-07-04", "carol@example.com");

    manager.submit().await.unwrap();

    let created = manager.api().created.borrow().clone();
    assert_eq!(
        created,
        vec![NewBirthday {
            name: "Carol ".to_string(),
            dob: "1990-07-04".to_string(),
            email: "carol@example.com".to_string(),
        }]
    );
    assert_eq!(manager.api().list_calls(), 2, "Mount plus one refresh");
    assert_eq!(manager.records().len(), 3);
    assert!(manager.form().is_empty(), "Form should be cleared");
    assert_eq!(manager.status_text().as_deref(), Some(MSG_ADDED));
    assert_eq!(manager.snapshot().status.unwrap().kind, StatusKind::Success);
    assert!(!manager.is_busy());
}

#[tokio::test]
async fn test_submit_failure_keeps_form() {
    let api = FakeApi::with_records(sample_records());
    api.fail_mutations.set(true);
    let manager = manager(api, true);
    manager.mount().await.unwrap();
    fill_form(&manager, "Carol", "1990-07-04", "carol@example.com");

    let result = manager.submit().await;

    assert!(matches!(result, Err(ActionError::Api(_))));
    assert_eq!(manager.api().list_calls(), 1, "No refresh after a failed create");
    assert_eq!(manager.form().name, "Carol");
    assert_eq!(manager.form().dob, "1990-07-04");
    assert_eq!(manager.form().email, "carol@example.com");
    assert_eq!(manager.status_text().as_deref(), Some(MSG_ADD_FAILED));
    assert_eq!(manager.snapshot().status.unwrap().kind, StatusKind::Error);
    assert!(!manager.is_busy());
}

#[tokio::test]
async fn test_submit_succeeds_even_if_refresh_fails() {
    let manager = manager(FakeApi::with_records(sample_records()), true);
    manager.mount().await.unwrap();
    manager.api().fail_list.set(true);
    fill_form(&manager, "Carol", "1990-07-04", "carol@example.com");

    manager.submit().await.unwrap();

    assert_eq!(manager.records(), sample_records(), "Stale list is kept");
    assert!(manager.form().is_empty());
    assert_eq!(manager.status_text().as_deref(), Some(MSG_ADDED));
}

#[tokio::test]
async fn test_busy_while_create_outstanding() {
    let gate = Rc::new(Notify::new());
    let manager = manager(
        FakeApi::with_records(sample_records()).gated(Rc::clone(&gate)),
        true,
    );
    manager.mount().await.unwrap();
    fill_form(&manager, "Carol", "1990-07-04", "carol@example.com");

    let observe = async {
        tokio::task::yield_now().await;

        assert!(manager.is_busy());
        assert_eq!(manager.status_text().as_deref(), Some(MSG_ADDING));
        assert_eq!(manager.records().len(), 2, "No optimistic insert");

        let second = manager.submit().await;
        assert!(matches!(second, Err(ActionError::Busy)));
        let delete = manager.delete(&RecordId::new("1")).await;
        assert!(matches!(delete, Err(ActionError::Busy)));

        gate.notify_one();
    };

    let (result, ()) = tokio::join!(manager.submit(), observe);

    result.unwrap();
    assert!(!manager.is_busy());
    assert_eq!(manager.api().created.borrow().len(), 1);
    assert!(manager.api().deleted.borrow().is_empty());
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_delete_declined_sends_nothing() {
    let (confirm, prompts) = ScriptedConfirm::answering(false);
    let manager = BirthdayManager::with_status_delay(
        FakeApi::with_records(sample_records()),
        confirm,
        CLEAR_DELAY,
    );
    manager.mount().await.unwrap();
    let before = manager.snapshot();

    let deleted = manager.delete(&RecordId::new("1")).await.unwrap();

    assert!(!deleted);
    assert_eq!(prompts.borrow().as_slice(), [DELETE_PROMPT]);
    assert!(manager.api().deleted.borrow().is_empty());
    assert_eq!(manager.api().list_calls(), 1);
    assert_eq!(manager.records(), before.records);
    assert_eq!(manager.status_text(), None);
    assert!(!manager.is_busy());
}

#[tokio::test]
async fn test_delete_confirmed_removes_and_refreshes() {
    let manager = manager(FakeApi::with_records(sample_records()), true);
    manager.mount().await.unwrap();

    let deleted = manager.delete(&RecordId::new("1")).await.unwrap();

    assert!(deleted);
    assert_eq!(manager.api().deleted.borrow().as_slice(), [RecordId::new("1")]);
    assert_eq!(manager.api().list_calls(), 2);
    assert_eq!(manager.records().len(), 1);
    assert_eq!(manager.records()[0].name, "Alice");
    assert_eq!(manager.status_text().as_deref(), Some(MSG_DELETED));
    assert!(!manager.is_busy());
}

#[tokio::test]
async fn test_delete_failure_keeps_list() {
    let api = FakeApi::with_records(sample_records());
    api.fail_mutations.set(true);
    let manager = manager(api, true);
    manager.mount().await.unwrap();

    let result = manager.delete(&RecordId::new("1")).await;

    assert!(matches!(result, Err(ActionError::Api(_))));
    assert_eq!(manager.api().list_calls(), 1, "No refresh after a failed delete");
    assert_eq!(manager.records(), sample_records());
    assert_eq!(manager.status_text().as_deref(), Some(MSG_DELETE_FAILED));
    assert!(!manager.is_busy());
}

#[tokio::test]
async fn test_busy_while_delete_outstanding() {
    let gate = Rc::new(Notify::new());
    let manager = manager(
        FakeApi::with_records(sample_records()).gated(Rc::clone(&gate)),
        true,
    );
    manager.mount().await.unwrap();

    let observe = async {
        tokio::task::yield_now().await;
        assert!(manager.is_busy());
        assert_eq!(manager.status_text().as_deref(), Some(MSG_DELETING));
        assert_eq!(manager.records().len(), 2, "No optimistic removal");
        gate.notify_one();
    };

    let id = RecordId::new("2");
    let (result, ()) = tokio::join!(manager.delete(&id), observe);

    assert!(result.unwrap());
    assert!(!manager.is_busy());
}

// ============================================================================
// Status lifecycle
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_status_clears_after_delay() {
    let manager = manager(FakeApi::default(), true);

    let _ = manager.submit().await;
    assert_eq!(manager.status_text().as_deref(), Some(MSG_MISSING_FIELDS));

    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert_eq!(manager.status_text().as_deref(), Some(MSG_MISSING_FIELDS));

    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert_eq!(manager.status_text(), None);
}

#[tokio::test(start_paused = true)]
async fn test_success_status_clears_after_delay() {
    let manager = manager(FakeApi::with_records(sample_records()), true);
    manager.mount().await.unwrap();
    fill_form(&manager, "Carol", "1990-07-04", "carol@example.com");

    manager.submit().await.unwrap();
    assert_eq!(manager.status_text().as_deref(), Some(MSG_ADDED));

    tokio::time::sleep(Duration::from_millis(2100)).await;
    assert_eq!(manager.status_text(), None);
}

#[tokio::test(start_paused = true)]
async fn test_newer_status_outlives_older_timer() {
    let manager = manager(FakeApi::default(), true);

    let _ = manager.submit().await;
    tokio::time::sleep(Duration::from_millis(1500)).await;

    manager.set_form_name("Alice");
    let _ = manager.submit().await;

    // First timer would have fired at 2000ms
    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert_eq!(manager.status_text().as_deref(), Some(MSG_MISSING_FIELDS));

    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert_eq!(manager.status_text(), None);
}

#[tokio::test(start_paused = true)]
async fn test_progress_status_is_not_cleared_by_earlier_timer() {
    let gate = Rc::new(Notify::new());
    let manager = manager(FakeApi::default().gated(Rc::clone(&gate)), true);

    let _ = manager.submit().await;
    fill_form(&manager, "Carol", "1990-07-04", "carol@example.com");

    let observe = async {
        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert_eq!(manager.status_text().as_deref(), Some(MSG_ADDING));
        gate.notify_one();
    };

    let (result, ()) = tokio::join!(manager.submit(), observe);

    result.unwrap();
    assert_eq!(manager.status_text().as_deref(), Some(MSG_ADDED));
}

// ============================================================================
// Queries and observation
// ============================================================================

#[tokio::test]
async fn test_visible_records_follow_queries() {
    let manager = manager(FakeApi::with_records(sample_records()), true);
    manager.mount().await.unwrap();

    let names = |m: &BirthdayManager<FakeApi, ScriptedConfirm>| -> Vec<String> {
        m.visible_records().into_iter().map(|r| r.name).collect()
    };

    assert_eq!(names(&manager), ["Alice", "bob"], "Sorted by name");

    manager.set_name_query("B");
    assert_eq!(names(&manager), ["bob"]);

    manager.set_name_query("");
    manager.set_month_query("1");
    assert_eq!(names(&manager), ["Alice"]);

    manager.set_name_query("b");
    assert!(names(&manager).is_empty(), "Filters combine");

    assert_eq!(manager.records(), sample_records(), "Raw list untouched");
}

#[tokio::test]
async fn test_subscribers_see_changes() {
    let manager = manager(FakeApi::with_records(sample_records()), true);
    let mut rx = manager.subscribe();

    manager.set_name_query("al");
    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().name_query, "al");

    manager.set_name_query("al");
    assert!(!rx.has_changed().unwrap(), "Same value should not notify");

    manager.mount().await.unwrap();
    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().records.len(), 2);
}

#[tokio::test]
async fn test_always_confirm_deletes_without_asking() {
    let manager = BirthdayManager::with_status_delay(
        FakeApi::with_records(sample_records()),
        AlwaysConfirm,
        CLEAR_DELAY,
    );
    manager.mount().await.unwrap();

    assert!(manager.delete(&RecordId::new("2")).await.unwrap());
    assert_eq!(manager.records().len(), 1);
}
