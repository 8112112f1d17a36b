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

//! Layout builder
//!
//! Creates the main application layout structure.

use crate::ui::components::{BirthdayList, FormPanel, SearchBar, StatusOverlay};
use gtk4::{prelude::*, Box as GtkBox, Orientation, Overlay, Separator};
use std::rc::Rc;

/// Builds the main application layout
///
/// Creates an overlay containing:
/// - Vertical box with:
///   - Create form at top
///   - Search bar and month selector
///   - Birthday list (fills remaining space)
/// - Status notice floating at the bottom
///
/// # Returns
///
/// Tuple of (root, form_panel, search_bar, birthday_list, status_overlay)
pub fn build_main_layout() -> (
    Overlay,
    Rc<FormPanel>,
    Rc<SearchBar>,
    Rc<BirthdayList>,
    Rc<StatusOverlay>,
) {
    let main_vbox = GtkBox::new(Orientation::Vertical, 10);
    main_vbox.set_margin_start(10);
    main_vbox.set_margin_end(10);
    main_vbox.set_margin_bottom(10);

    // TOP: Create form
    let form_panel = Rc::new(FormPanel::new());
    main_vbox.append(form_panel.widget());

    main_vbox.append(&Separator::new(Orientation::Horizontal));

    // MIDDLE: Search + month filter
    let search_bar = Rc::new(SearchBar::new());
    main_vbox.append(search_bar.widget());

    // BOTTOM: List
    let birthday_list = Rc::new(BirthdayList::new());
    main_vbox.append(birthday_list.widget());

    // Status notice floats above everything
    let status_overlay = Rc::new(StatusOverlay::new());
    let root = Overlay::new();
    root.set_child(Some(&main_vbox));
    root.add_overlay(status_overlay.widget());

    (root, form_panel, search_bar, birthday_list, status_overlay)
}
