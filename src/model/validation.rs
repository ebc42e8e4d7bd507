//! Field-level validation for request bodies.
//!
//! Messages follow the `"<field>: <reason>"` convention so they can be returned verbatim in
//! the `message` list of a 422 response.

use once_cell::sync::Lazy;
use regex::Regex;

static POSTAL_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{3}$").expect("invalid postal code regex"));

/// Request body whose accepted keys are known up front and whose fields can be validated.
pub trait Validate {
    /// Every key the body accepts. Anything else is rejected as an extra field.
    const FIELDS: &'static [&'static str];

    /// Keys that must be present and not null.
    const REQUIRED: &'static [&'static str] = &[];

    /// Runs the field validators, returning one message per failed check.
    ///
    /// Only fields present in the payload are checked.
    fn validate(&self) -> Vec<String> {
        Vec::new()
    }

    /// True for a partial update that sets nothing.
    fn is_empty(&self) -> bool {
        false
    }

    /// Message returned for a partial update that sets nothing.
    fn empty_message() -> String {
        let keys = match Self::FIELDS.split_last() {
            Some((last, [])) => last.to_string(),
            Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
            None => String::new(),
        };

        format!("At least one of the keys {} must exist.", keys)
    }
}

/// Accumulates validation messages for a single request body.
#[derive(Debug, Default)]
pub struct FieldErrors(Vec<String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks the character count of `value` against inclusive bounds.
    pub fn length(&mut self, field: &str, value: &str, min: usize, max: Option<usize>) -> &mut Self {
        let count = value.chars().count();

        if count < min {
            self.0.push(format!(
                "{}: ensure this value has at least {} characters",
                field, min
            ));
        } else if let Some(max) = max.filter(|max| count > *max) {
            self.0.push(format!(
                "{}: ensure this value has at most {} characters",
                field, max
            ));
        }

        self
    }

    /// Checks a new password: 5 to 24 characters with a lowercase letter, an uppercase
    /// letter and a digit.
    pub fn password(&mut self, field: &str, value: &str) -> &mut Self {
        let before = self.0.len();
        self.length(field, value, 5, Some(24));
        if self.0.len() > before {
            return self;
        }

        let lower = value.chars().any(char::is_lowercase);
        let upper = value.chars().any(char::is_uppercase);
        let digit = value.chars().any(|c| c.is_ascii_digit());

        if !(lower && upper && digit) {
            self.0.push(format!(
                "{}: must contain at least 1 digit and 1 upper case.",
                field
            ));
        }

        self
    }

    /// Checks a postal code in the `0000-000` format.
    pub fn postal_code(&mut self, field: &str, value: &str) -> &mut Self {
        if !POSTAL_CODE_RE.is_match(value) {
            self.0.push(format!(
                "{}: must correspond to the following format '0000-000'",
                field
            ));
        }

        self
    }

    /// Checks that `value` is one of `permitted`.
    pub fn one_of(&mut self, field: &str, value: i32, permitted: &[i32]) -> &mut Self {
        if !permitted.contains(&value) {
            let permitted = permitted
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            self.0.push(format!(
                "{}: value is not a valid enumeration member; permitted: {}",
                field, permitted
            ));
        }

        self
    }

    pub fn into_messages(self) -> Vec<String> {
        self.0
    }
}
