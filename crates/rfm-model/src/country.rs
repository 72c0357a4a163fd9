//! Country reference entries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Offset from an ASCII uppercase letter to its regional indicator symbol.
const REGIONAL_INDICATOR_OFFSET: u32 = 0x1F1E6 - 'A' as u32;

/// An entry of the read-only country lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Country {
    /// Display label, stored on the referral when selected.
    pub label: String,
    /// ISO 3166-1 alpha-2 code.
    pub code: String,
}

impl Country {
    pub fn new(label: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            code: code.into(),
        }
    }

    /// Flag emoji built from the code's regional indicator symbols.
    ///
    /// Characters that are not ASCII letters are passed through unchanged.
    pub fn flag(&self) -> String {
        self.code
            .chars()
            .map(|c| {
                let upper = c.to_ascii_uppercase();
                if upper.is_ascii_uppercase() {
                    char::from_u32(upper as u32 + REGIONAL_INDICATOR_OFFSET).unwrap_or(c)
                } else {
                    c
                }
            })
            .collect()
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.flag(), self.label)
    }
}
