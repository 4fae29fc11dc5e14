//! Identifiers handed into and produced by the trucode step.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a previously bound credential (a trucode).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialReference(String);

impl CredentialReference {
    /// Wraps an opaque credential identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Uuid> for CredentialReference {
    fn from(trucode_id: Uuid) -> Self {
        Self(trucode_id.to_string())
    }
}

impl fmt::Display for CredentialReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a single trusonafication.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChallengeReference(String);

impl ChallengeReference {
    /// Wraps an opaque trusonafication identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generates a fresh random (v4) identifier.
    #[must_use]
    pub fn generate() -> Self {
        Uuid::new_v4().into()
    }

    /// Returns the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Uuid> for ChallengeReference {
    fn from(trusonafication_id: Uuid) -> Self {
        Self(trusonafication_id.to_string())
    }
}

impl fmt::Display for ChallengeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A deep link into the companion app.
///
/// Only constructible from a non-blank string, so holding one means the
/// step takes the redirect branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLinkPayload(String);

impl DeepLinkPayload {
    /// Returns `Some` when `raw` is present and not blank.
    ///
    /// The payload is kept verbatim. Blankness matches Java's
    /// `Character.isWhitespace`, so no-break spaces count as content.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        raw.filter(|s| !s.chars().all(is_blank_char))
            .map(|s| Self(s.to_string()))
    }

    /// Returns the payload.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Space, line and paragraph separators except the non-breaking ones, plus
// the ASCII controls \t \n \x0B \x0C \r and the \x1C..=\x1F separators.
const fn is_blank_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | '\u{1C}'..='\u{1F}'
            | ' '
            | '\u{1680}'
            | '\u{2000}'..='\u{2006}'
            | '\u{2008}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{205F}'
            | '\u{3000}'
    )
}
