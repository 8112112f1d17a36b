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

//! Create form component
//!
//! Three entries (name, date of birth, email) and an add button laid out
//! in a grid. The parent forwards every edit to the view-model and calls
//! [`FormPanel::sync`] when the view-model changes.

use gtk4::{prelude::*, Button, Entry, Grid, Label};

use crate::core::BirthdayForm;

/// The "add birthday" form
pub struct FormPanel {
    /// Root widget (grid)
    widget: Grid,
    name_entry: Entry,
    dob_entry: Entry,
    email_entry: Entry,
    add_button: Button,
}

impl Default for FormPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl FormPanel {
    pub fn new() -> Self {
        let grid = Grid::builder()
            .row_spacing(12)
            .column_spacing(12)
            .margin_start(10)
            .margin_end(10)
            .margin_top(10)
            .build();

        let name_entry = Self::attach_row(&grid, 0, "Name:", "e.g., Alice");
        let dob_entry = Self::attach_row(&grid, 1, "Date of birth:", "YYYY-MM-DD");
        let email_entry = Self::attach_row(&grid, 2, "Email:", "alice@example.com");

        let add_button = Button::builder()
            .label("Add Birthday")
            .halign(gtk4::Align::End)
            .build();
        add_button.add_css_class("suggested-action");
        grid.attach(&add_button, 1, 3, 1, 1);

        Self {
            widget: grid,
            name_entry,
            dob_entry,
            email_entry,
            add_button,
        }
    }

    /// Adds a label and entry as grid row `row`
    fn attach_row(grid: &Grid, row: i32, label: &str, placeholder: &str) -> Entry {
        let label = Label::builder()
            .label(label)
            .halign(gtk4::Align::End)
            .build();
        let entry = Entry::builder()
            .placeholder_text(placeholder)
            .hexpand(true)
            .build();

        grid.attach(&label, 0, row, 1, 1);
        grid.attach(&entry, 1, row, 1, 1);
        entry
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &Grid {
        &self.widget
    }

    pub fn name_entry(&self) -> &Entry {
        &self.name_entry
    }

    pub fn dob_entry(&self) -> &Entry {
        &self.dob_entry
    }

    pub fn email_entry(&self) -> &Entry {
        &self.email_entry
    }

    pub fn add_button(&self) -> &Button {
        &self.add_button
    }

    /// Mirrors the view-model's form and busy flag into the widgets
    ///
    /// Entries are only written when their text differs, so the cursor
    /// does not jump while the user types.
    pub fn sync(&self, form: &BirthdayForm, busy: bool) {
        set_text_if_changed(&self.name_entry, &form.name);
        set_text_if_changed(&self.dob_entry, &form.dob);
        set_text_if_changed(&self.email_entry, &form.email);
        self.add_button.set_sensitive(!busy);
    }
}

fn set_text_if_changed(entry: &Entry, text: &str) {
    if entry.text().as_str() != text {
        entry.set_text(text);
    }
}
