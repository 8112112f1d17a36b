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

//! src/core/mod.rs
//!
//! Core business logic module
//!
//! This module contains the fundamental data structures and algorithms
//! for birthday management, including:
//! - Type definitions for records, create payloads and form input
//! - The sorted/filtered view derivation
//! - Create form validation
//! - Date display formatting
//!
//! All business logic is isolated from UI and network concerns so it can be
//! unit tested without a backend or a display server.

pub mod filter;
pub mod format;
pub mod types;
pub mod validator;

pub use filter::{compare_names, sort_records, NameCollator, ViewFilter};
pub use format::{format_long_date, month_options};
pub use types::*;
pub use validator::{validate_form, FormField, ValidationError};

#[cfg(test)]
mod tests;
