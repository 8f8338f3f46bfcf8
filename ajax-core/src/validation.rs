//! Required-field checks run before a form is submitted.

use serde::{Deserialize, Serialize};

pub const REQUIRED_MESSAGE: &str = "Bu alan zorunludur.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub required: bool,
}

impl FormField {
    pub fn required(name: impl Into<String>, value: impl Into<String>) -> Self {
        FormField {
            name: name.into(),
            value: value.into(),
            required: true,
        }
    }

    pub fn optional(name: impl Into<String>, value: impl Into<String>) -> Self {
        FormField {
            name: name.into(),
            value: value.into(),
            required: false,
        }
    }

    fn is_missing(&self) -> bool {
        self.required && self.value.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub name: String,
    pub message: String,
}

/// Check that every required field holds a non-blank value.
///
/// Returns the offending fields in input order.
pub fn validate_required<'a, I>(fields: I) -> Result<(), Vec<FieldError>>
where
    I: IntoIterator<Item = &'a FormField>,
{
    let errors: Vec<FieldError> = fields
        .into_iter()
        .filter(|field| field.is_missing())
        .map(|field| FieldError {
            name: field.name.clone(),
            message: REQUIRED_MESSAGE.to_string(),
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
