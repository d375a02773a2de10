// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
use crate::types::Ordinal;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A catalog row is missing a required field, holds an unusable value, or
    /// repeats an ordinal. `row` is 1-based and counts data rows only.
    #[error("malformed catalog (row {row}): {reason}")]
    MalformedCatalog { row: usize, reason: String },

    #[error("invalid entry {ordinal}: {reason}")]
    InvalidEntry { ordinal: Ordinal, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn malformed(row: usize, reason: impl Into<String>) -> Self {
        Self::MalformedCatalog {
            row,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid(ordinal: Ordinal, reason: impl Into<String>) -> Self {
        Self::InvalidEntry {
            ordinal,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::malformed(3, "missing field 'name'").to_string(),
            "malformed catalog (row 3): missing field 'name'"
        );
        assert_eq!(
            Error::invalid(42, "blank tag").to_string(),
            "invalid entry 42: blank tag"
        );
    }
}
