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

//! Status overlay component
//!
//! A floating label at the bottom of the window that shows the
//! view-model's current notice and hides when there is none.

use gtk4::{prelude::*, Label};

use crate::ui::{StatusKind, StatusMessage};

const KIND_CLASSES: [&str; 3] = ["status-progress", "status-success", "status-error"];

/// Transient notice shown over the main layout
pub struct StatusOverlay {
    widget: Label,
}

impl Default for StatusOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusOverlay {
    pub fn new() -> Self {
        let widget = Label::builder()
            .halign(gtk4::Align::Center)
            .valign(gtk4::Align::End)
            .margin_bottom(20)
            .visible(false)
            .build();
        widget.add_css_class("status-overlay");

        Self { widget }
    }

    /// Returns the root widget, meant to be added as an overlay child
    pub fn widget(&self) -> &Label {
        &self.widget
    }

    /// Shows `status`, or hides the overlay when it is `None`
    pub fn update(&self, status: Option<&StatusMessage>) {
        let Some(status) = status else {
            self.widget.set_visible(false);
            return;
        };

        for class in KIND_CLASSES {
            self.widget.remove_css_class(class);
        }
        self.widget.add_css_class(kind_class(status.kind));
        self.widget.set_label(&status.text);
        self.widget.set_visible(true);
    }
}

fn kind_class(kind: StatusKind) -> &'static str {
    match kind {
        StatusKind::Progress => KIND_CLASSES[0],
        StatusKind::Success => KIND_CLASSES[1],
        StatusKind::Error => KIND_CLASSES[2],
    }
}
