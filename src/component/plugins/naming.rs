//! Naming rules shared by the built-in builders.

use crate::component::builder::BuilderError;

/// Maximum length of a service or partition name.
const MAX_NAME_LENGTH: usize = 64;

/// Checks that `value` is a usable service or partition name.
///
/// Names start with an ASCII letter and contain only ASCII letters, digits,
/// `-` and `_`.
pub(crate) fn check_name(
    kind: &'static str,
    field: &str,
    value: &str,
) -> Result<(), BuilderError> {
    if value.len() > MAX_NAME_LENGTH {
        return Err(BuilderError::rejected(
            kind,
            format!("{field} '{value}' exceeds {MAX_NAME_LENGTH} characters"),
        ));
    }

    let mut chars = value.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let rest_valid = chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !starts_with_letter || !rest_valid {
        return Err(BuilderError::rejected(
            kind,
            format!(
                "{field} '{value}' must start with a letter and contain only letters, \
                 digits, '-' or '_'"
            ),
        ));
    }
    Ok(())
}
