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

//! Header bar builder
//!
//! Creates the application header bar with menu

use gtk4::{gio::Menu, prelude::WidgetExt, Button, HeaderBar, MenuButton};

/// Builds the application header bar
///
/// Creates a HeaderBar containing:
/// - Refresh button (app.refresh action)
/// - Menu button with Refresh, Clear Filters and Quit
///
/// # Returns
///
/// The configured HeaderBar widget
pub fn build_header_bar() -> HeaderBar {
    let header_bar = HeaderBar::new();

    // Menu options
    let menu = Menu::new();
    menu.append(Some("Refresh"), Some("app.refresh"));
    menu.append(Some("Clear Filters"), Some("app.clear-filters"));
    menu.append(Some("Quit"), Some("app.quit"));

    let menu_button = MenuButton::new();
    menu_button.set_icon_name("open-menu-symbolic");
    menu_button.set_menu_model(Some(&menu));

    let refresh_button = Button::builder()
        .icon_name("view-refresh-symbolic")
        .action_name("app.refresh")
        .tooltip_text("Reload birthdays from the server")
        .build();

    refresh_button.add_css_class("flat");
    header_bar.pack_start(&refresh_button);
    header_bar.pack_end(&menu_button);

    header_bar
}
