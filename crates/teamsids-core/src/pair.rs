//! Group/channel identifier pair produced once per input line.

use serde::Serialize;

/// Identifiers extracted from one input line.
///
/// Either field is `None` when the line did not match or failed to decode.
/// The parser only ever produces both or neither, but the formatter still
/// treats a half-filled pair as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierPair {
    pub group_id: Option<String>,
    pub channel_id: Option<String>,
}

impl IdentifierPair {
    pub fn new(group_id: impl Into<String>, channel_id: impl Into<String>) -> Self {
        Self {
            group_id: Some(group_id.into()),
            channel_id: Some(channel_id.into()),
        }
    }

    /// Pair with both fields absent.
    pub fn absent() -> Self {
        Self::default()
    }

    /// Both identifiers, or `None` if either is missing.
    pub fn complete(&self) -> Option<PairRecord<'_>> {
        match (self.group_id.as_deref(), self.channel_id.as_deref()) {
            (Some(group_id), Some(channel_id)) => Some(PairRecord {
                group_id,
                channel_id,
            }),
            _ => None,
        }
    }
}

/// Borrowed view of a pair with both identifiers present.
///
/// Field order here is the key order of the JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PairRecord<'a> {
    pub group_id: &'a str,
    pub channel_id: &'a str,
}
