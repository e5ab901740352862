//! Length-bounded name concatenation.
//!
//! Joined names that do not fit the budget are cut and finished with a short
//! SHA-256 digest of the *full* joined string, so two names sharing the kept
//! prefix still differ. The digest input must stay byte-identical across
//! releases: hosts already carry names produced this way.

use crate::digest::sha256_hex;
use crate::label::is_label_char;

/// Budget used when none is configured. Shortened names come out at 63 bytes.
pub const DEFAULT_MAX_LENGTH: usize = 64;

/// Smallest usable budget; the inspected index is `max_length - 8`.
pub const MIN_MAX_LENGTH: usize = 8;

/// Join the non-empty `parts` with `-`, shortening the result when its length
/// reaches `max_length`.
///
/// When shortening, the byte at `max_length - 8` decides the cut:
/// - `[a-z0-9]`: keep `max_length - 7` bytes and append `-` plus 5 digest chars
/// - otherwise: keep `max_length - 8` bytes and append `-` plus 6 digest chars
///
/// Either way the result is `max_length - 1` bytes long. A cut that lands inside a
/// multi-byte character moves back to the previous character boundary. Budgets
/// below [`MIN_MAX_LENGTH`] are raised to it.
pub fn safe_concat_name<S: AsRef<str>>(max_length: usize, parts: &[S]) -> String {
    let max_length = max_length.max(MIN_MAX_LENGTH);

    let full_path = parts
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    if full_path.len() < max_length {
        return full_path;
    }

    let digest = sha256_hex(&full_path);

    // The cut may leave a trailing '-' or other separator; only an alphanumeric
    // at the inspected index allows the longer cut.
    let pivot = full_path.as_bytes()[max_length - 8];
    let (cut, digest_len) = if is_label_char(char::from(pivot)) {
        (max_length - 7, 5)
    } else {
        (max_length - 8, 6)
    };
    let cut = floor_char_boundary(&full_path, cut);

    tracing::debug!(
        len = full_path.len(),
        max_length,
        cut,
        "shortening concatenated name"
    );

    format!("{}-{}", &full_path[..cut], &digest[..digest_len])
}

fn floor_char_boundary(s: &str, index: usize) -> usize {
    (0..=index.min(s.len()))
        .rev()
        .find(|i| s.is_char_boundary(*i))
        .unwrap_or(0)
}
