//! Position identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a stored position record.
///
/// Opaque text: uuid v4 for positions created here, whatever the source
/// used for imported ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PositionId(String);

impl PositionId {
    /// Wrap an existing id.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Fresh uuid v4.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Keep an imported id, or generate one when it is missing or blank.
    #[must_use]
    pub fn imported_or_generate(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(id) if !id.is_empty() => Self::new(id),
            _ => Self::generate(),
        }
    }

    /// Id text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
