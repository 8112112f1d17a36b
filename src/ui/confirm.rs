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

//! Delete confirmation backed by a modal `AlertDialog`

use gtk4::{AlertDialog, ApplicationWindow};
use tracing::debug;

use crate::ui::Confirm;

/// Index of the confirming button in the dialog's button list
const DELETE_BUTTON: i32 = 1;

/// Asks for confirmation with a modal dialog over the main window
pub struct DialogConfirm {
    window: ApplicationWindow,
}

impl DialogConfirm {
    pub fn new(window: &ApplicationWindow) -> Self {
        Self {
            window: window.clone(),
        }
    }
}

impl Confirm for DialogConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        let dialog = AlertDialog::builder()
            .modal(true)
            .message("Delete Birthday?")
            .detail(prompt)
            .buttons(["Cancel", "Delete"])
            .cancel_button(0)
            .default_button(0)
            .build();

        match dialog.choose_future(Some(&self.window)).await {
            Ok(choice) => choice == DELETE_BUTTON,
            Err(e) => {
                // Dismissed with Escape or the window closed
                debug!("Confirmation dialog dismissed: {}", e);
                false
            }
        }
    }
}
