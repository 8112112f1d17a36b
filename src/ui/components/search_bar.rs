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

//! Search bar component
//!
//! Name prefix search plus a month selector. Both feed the view-model's
//! queries; the parent wires the signals.

use gtk4::{prelude::*, Box as GtkBox, DropDown, Orientation, SearchEntry};

use crate::core::month_options;

/// Search entry and month selector side by side
pub struct SearchBar {
    /// Root widget (horizontal box)
    widget: GtkBox,
    /// Name prefix entry
    entry: SearchEntry,
    /// "All Months", "January" .. "December"
    month_dropdown: DropDown,
    /// Query values matching the dropdown positions
    month_values: Vec<String>,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBar {
    /// Creates a new search bar
    ///
    /// Returns just the widgets; the parent connects
    /// `entry().connect_search_changed` and
    /// `month_dropdown().connect_selected_notify`.
    ///
    /// # Example
    /// ```no_run
    /// use birthday_manager::ui::components::SearchBar;
    /// use gtk4::prelude::*;
    ///
    /// let search_bar = SearchBar::new();
    ///
    /// search_bar.entry().connect_search_changed(move |entry| {
    ///     let query = entry.text().to_string();
    ///     // ... filter logic here
    /// });
    /// ```
    pub fn new() -> Self {
        let widget = GtkBox::new(Orientation::Horizontal, 10);

        let entry = SearchEntry::builder()
            .placeholder_text("Search by name...")
            .hexpand(true)
            .build();

        let (month_values, labels): (Vec<String>, Vec<String>) =
            month_options().into_iter().unzip();
        let label_refs: Vec<&str> = labels.iter().map(String::as_str).collect();
        let month_dropdown = DropDown::from_strings(&label_refs);

        widget.append(&entry);
        widget.append(&month_dropdown);

        Self {
            widget,
            entry,
            month_dropdown,
            month_values,
        }
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }

    pub fn entry(&self) -> &SearchEntry {
        &self.entry
    }

    pub fn month_dropdown(&self) -> &DropDown {
        &self.month_dropdown
    }

    /// Month query for the current selection, `""` for all months
    pub fn selected_month_query(&self) -> String {
        usize::try_from(self.month_dropdown.selected())
            .ok()
            .and_then(|index| self.month_values.get(index))
            .cloned()
            .unwrap_or_default()
    }

    /// Clears the name query and selects all months
    pub fn clear(&self) {
        self.entry.set_text("");
        self.month_dropdown.set_selected(0);
    }
}
