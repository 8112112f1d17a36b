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

//! Birthday list component
//!
//! Displays the visible records in a scrollable list view.
//! Each row shows the name, the long-form date of birth, the email
//! and a delete button.

use gtk4::{prelude::*, Box as GtkBox, Button, Label, ListBox, Orientation, ScrolledWindow};
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use crate::core::{format_long_date, BirthdayRecord, RecordId};

type DeleteCallback = Rc<dyn Fn(RecordId)>;

/// Displays a scrollable list of birthdays
pub struct BirthdayList {
    /// Root widget (scrollable container)
    widget: ScrolledWindow,
    /// List box containing rows
    list_box: ListBox,
    /// Cache of currently displayed records
    current_records: RefCell<Vec<BirthdayRecord>>,
    /// Whether delete buttons are currently disabled
    busy: Cell<bool>,
    /// Called with the row's id when its delete button is clicked
    on_delete: RefCell<Option<DeleteCallback>>,
}

impl Default for BirthdayList {
    fn default() -> Self {
        Self::new()
    }
}

impl BirthdayList {
    /// Creates an empty list
    pub fn new() -> Self {
        // Create scrollable container
        let scrolled_window = ScrolledWindow::builder()
            .hexpand(true)
            .vexpand(true)
            .build();

        let list_box = ListBox::builder()
            .selection_mode(gtk4::SelectionMode::None)
            .build();

        let placeholder = Label::builder()
            .label("No birthdays to show")
            .margin_top(20)
            .margin_bottom(20)
            .build();
        placeholder.add_css_class("dim-label");
        list_box.set_placeholder(Some(&placeholder));

        scrolled_window.set_child(Some(&list_box));

        Self {
            widget: scrolled_window,
            list_box,
            current_records: RefCell::new(Vec::new()),
            busy: Cell::new(false),
            on_delete: RefCell::new(None),
        }
    }

    /// Registers the handler for per-row delete buttons
    pub fn connect_delete<F>(&self, callback: F)
    where
        F: Fn(RecordId) + 'static,
    {
        *self.on_delete.borrow_mut() = Some(Rc::new(callback));
    }

    /// Shows `records`, rebuilding rows only when something changed
    ///
    /// # Arguments
    /// * `records` - Sorted and filtered records to display
    /// * `busy` - Disables every delete button while a request is outstanding
    pub fn update_with_records(&self, records: &[BirthdayRecord], busy: bool) {
        if self.busy.get() == busy && self.current_records.borrow().as_slice() == records {
            return;
        }

        // Clear existing rows, the placeholder stays
        self.list_box.remove_all();

        *self.current_records.borrow_mut() = records.to_vec();
        self.busy.set(busy);

        for (index, record) in records.iter().enumerate() {
            let row = self.create_row(record, index, busy);
            self.list_box.append(&row);
        }
    }

    /// Create a single row widget for a record
    fn create_row(&self, record: &BirthdayRecord, index: usize, busy: bool) -> GtkBox {
        let row = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(20)
            .margin_start(10)
            .margin_end(10)
            .margin_top(5)
            .margin_bottom(5)
            .build();

        if index % 2 == 0 {
            row.add_css_class("even-row");
        } else {
            row.add_css_class("odd-row");
        }

        let name_label = Label::builder()
            .label(&record.name)
            .width_chars(20)
            .xalign(0.0)
            .build();
        name_label.add_css_class("heading");

        let dob_label = Label::builder()
            .label(format_long_date(record.dob))
            .width_chars(18)
            .xalign(0.0)
            .build();

        let email_label = Label::builder()
            .label(&record.email)
            .xalign(0.0)
            .hexpand(true)
            .ellipsize(gtk4::pango::EllipsizeMode::End)
            .build();

        let delete_button = Button::builder()
            .label("Delete")
            .sensitive(!busy)
            .tooltip_text(format!("Delete {}", record.name))
            .build();
        delete_button.add_css_class("destructive-action");

        let on_delete = self.on_delete.borrow().clone();
        let id = record.id.clone();
        delete_button.connect_clicked(move |_| {
            if let Some(callback) = &on_delete {
                callback(id.clone());
            }
        });

        row.append(&name_label);
        row.append(&dob_label);
        row.append(&email_label);
        row.append(&delete_button);

        row
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &ScrolledWindow {
        &self.widget
    }

    /// Returns count of currently displayed records
    pub fn count(&self) -> usize {
        self.current_records.borrow().len()
    }
}
