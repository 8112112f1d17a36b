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

//! User interface with MVC architecture
//!
//! # Architecture
//!
//! - **Model**: Backend records behind `BirthdayApi` (in the `api` module)
//! - **View**: GTK4 components (in `components/`, feature `gui`) or the CLI
//! - **Controller**: Observable view-model (in `controller.rs`)
//!
//! # Module Structure
//!
//! ```text
//! ui/
//! ├── mod.rs          // This file - exports
//! ├── controller.rs   // View-model, always built
//! ├── app.rs          // GTK4 Application setup (gui)
//! ├── actions.rs      // Quit and refresh actions (gui)
//! ├── confirm.rs      // Alert dialog confirmation (gui)
//! ├── builders/       // UI building functions (gui)
//! └── components/     // Reusable UI widgets (gui)
//! ```

pub mod controller;

#[cfg(feature = "gui")]
mod actions;
#[cfg(feature = "gui")]
pub mod app;
#[cfg(feature = "gui")]
mod builders;
#[cfg(feature = "gui")]
pub mod components;
#[cfg(feature = "gui")]
pub mod confirm;

pub use controller::{
    ActionError, AlwaysConfirm, BirthdayManager, Confirm, StatusKind, StatusMessage, ViewState,
};

#[cfg(feature = "gui")]
pub use {
    app::{App, GuiManager},
    confirm::DialogConfirm,
};

#[cfg(test)]
mod tests;
