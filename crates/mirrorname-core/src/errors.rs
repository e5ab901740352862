use thiserror::Error;

/// Translator construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("max length {got} is below the minimum of {min}")]
    MaxLengthTooSmall { got: usize, min: usize },

    #[error("cluster name must not be empty")]
    EmptyClusterName,
}

/// Reasons a string is not a valid DNS-1123 label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("name must not be empty")]
    Empty,

    #[error("name '{name}' is {len} characters, must be at most {max}")]
    TooLong { name: String, len: usize, max: usize },

    #[error("name '{name}' contains invalid character '{ch}' at index {index}")]
    InvalidChar {
        name: String,
        ch: char,
        index: usize,
    },

    #[error("name '{name}' must start with a lowercase letter or digit")]
    BadStart { name: String },

    #[error("name '{name}' must end with a lowercase letter or digit")]
    BadEnd { name: String },
}
