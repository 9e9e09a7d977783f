use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::block::DisplayBlock;

/// One completed text synthesis: the prompt that drove it, the rendered
/// block sequence, and the moment it finished.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedResponse {
    pub prompt: String,
    pub blocks: Vec<DisplayBlock>,
    pub timestamp: DateTime<Utc>,
}

/// Append-only record of completed syntheses within one session,
/// oldest first. Entries are never edited, reordered, or dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationLog {
    entries: Vec<GeneratedResponse>,
}

impl GenerationLog {
    pub fn new() -> GenerationLog {
        GenerationLog::default()
    }

    pub fn append(&mut self, response: GeneratedResponse) {
        self.entries.push(response);
    }

    /// All entries in completion order.
    pub fn entries(&self) -> &[GeneratedResponse] {
        &self.entries
    }

    /// The most recently appended entry.
    pub fn latest(&self) -> Option<&GeneratedResponse> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
