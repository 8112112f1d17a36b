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

//! Create form validation
//!
//! The only rule is presence: name, date of birth and email must each hold
//! some non-whitespace text. Email shape and date plausibility are left to
//! the backend.

use std::fmt;
use thiserror::Error;

use crate::core::types::{BirthdayForm, NewBirthday};

/// Fields of the create form
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FormField {
    Name,
    Dob,
    Email,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormField::Name => write!(f, "name"),
            FormField::Dob => write!(f, "date of birth"),
            FormField::Email => write!(f, "email"),
        }
    }
}

/// Validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty or whitespace-only
    #[error("Missing required field: {0}")]
    MissingField(FormField),
}

/// Returns every field that is empty or whitespace-only, in form order
pub fn missing_fields(form: &BirthdayForm) -> Vec<FormField> {
    [
        (FormField::Name, &form.name),
        (FormField::Dob, &form.dob),
        (FormField::Email, &form.email),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(field, _)| field)
    .collect()
}

/// Validates the form and builds the create payload
///
/// Values are copied as typed, without trimming.
///
/// # Returns
///
/// * `Ok(NewBirthday)` - All fields present
/// * `Err(ValidationError::MissingField)` - First missing field
pub fn validate_form(form: &BirthdayForm) -> Result<NewBirthday, ValidationError> {
    if let Some(field) = missing_fields(form).into_iter().next() {
        return Err(ValidationError::MissingField(field));
    }

    Ok(NewBirthday {
        name: form.name.clone(),
        dob: form.dob.clone(),
        email: form.email.clone(),
    })
}
