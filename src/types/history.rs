use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

/// A single generated value remembered for the current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize)]
pub struct HistoryEntry {
    pub id: String,
    pub value: String,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
}
