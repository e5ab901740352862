//! DNS-1123 label checks.
//!
//! Object names in the host cluster are lowercase alphanumerics and `-`, must start
//! and end with an alphanumeric, and are at most 63 characters long.

use crate::errors::LabelError;

pub const MAX_LABEL_LENGTH: usize = 63;

pub(crate) fn is_label_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

/// Validate `name` as a DNS-1123 label.
pub fn validate_label(name: &str) -> Result<(), LabelError> {
    if name.is_empty() {
        return Err(LabelError::Empty);
    }

    let len = name.chars().count();
    if len > MAX_LABEL_LENGTH {
        return Err(LabelError::TooLong {
            name: name.to_string(),
            len,
            max: MAX_LABEL_LENGTH,
        });
    }

    if let Some((index, ch)) = name
        .chars()
        .enumerate()
        .find(|(_, c)| !is_label_char(*c) && *c != '-')
    {
        return Err(LabelError::InvalidChar {
            name: name.to_string(),
            ch,
            index,
        });
    }

    if !name.starts_with(is_label_char) {
        return Err(LabelError::BadStart {
            name: name.to_string(),
        });
    }
    if !name.ends_with(is_label_char) {
        return Err(LabelError::BadEnd {
            name: name.to_string(),
        });
    }

    Ok(())
}

pub fn is_valid_label(name: &str) -> bool {
    validate_label(name).is_ok()
}
