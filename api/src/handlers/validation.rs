//! Request body parsing and validation
//!
//! Bodies are read as raw bytes and decoded with `serde_json` so a malformed
//! body always yields 400 with the parser's message. Validation failures are
//! reported as `{"<Field>": "<Field> is <rule>"}`, one entry per field.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::error::AppError;

/// Decode a JSON body and run its validation rules
pub fn parse_and_validate<T>(body: &[u8]) -> Result<T, AppError>
where
    T: DeserializeOwned + Validate,
{
    let request: T =
        serde_json::from_slice(body).map_err(|e| AppError::BadRequest(e.to_string()))?;
    request.validate()?;
    Ok(request)
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(error_map(&errors))
    }
}

/// Flatten validator errors into `Field -> "Field is rule"`
///
/// Only the first failed rule of each field is reported.
pub fn error_map(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, failures)| {
            let rule = failures.first()?.code.to_string();
            let field = display_name(&field.to_string());
            Some((field.clone(), format!("{} is {}", field, rule)))
        })
        .collect()
}

/// `name` -> `Name`
fn display_name(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
