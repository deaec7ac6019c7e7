use serde::{Deserialize, Serialize};

/// Heuristic strength bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Weak,
    Fair,
    Good,
    Strong,
    Legendary,
}

impl Strength {
    /// Maps a point total onto its bucket.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=39 => Strength::Weak,
            40..=59 => Strength::Fair,
            60..=79 => Strength::Good,
            80..=94 => Strength::Strong,
            _ => Strength::Legendary,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Weak => "weak",
            Strength::Fair => "fair",
            Strength::Good => "good",
            Strength::Strong => "strong",
            Strength::Legendary => "legendary",
        }
    }
}

/// Output of the additive point system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthResult {
    pub score: u8,
    pub strength: Strength,
}

impl StrengthResult {
    /// The result reported when nothing was generated.
    pub fn empty() -> Self {
        Self {
            score: 0,
            strength: Strength::Weak,
        }
    }
}

/// Coarse estimate of brute-force duration.
///
/// Counted variants carry the floored number of whole units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "count", rename_all = "lowercase")]
pub enum CrackTime {
    Instant,
    Seconds(u64),
    Minutes(u64),
    Hours(u64),
    Days(u64),
    Years(u64),
    Centuries(u64),
    Uncrackable,
}

/// An advisory line attached to an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tip {
    /// Lengthen past 12 characters.
    Length,
    /// Add non-alphanumeric characters.
    Symbols,
    /// Add digits.
    Numbers,
    /// Nothing to improve.
    Perfect,
    /// Informational line shown next to UUID output.
    UuidInfo,
}

impl Tip {
    /// Dot-path key of this tip in the locale tables.
    pub fn key(&self) -> &'static str {
        match self {
            Tip::Length => "tips.length",
            Tip::Symbols => "tips.symbols",
            Tip::Numbers => "tips.numbers",
            Tip::Perfect => "tips.perfect",
            Tip::UuidInfo => "tips.uuid_info",
        }
    }
}

/// Information-theoretic analysis rendered for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalAnalysis {
    /// Estimated bits of entropy.
    pub entropy: f64,
    pub cracking_time: String,
    pub tips: Vec<String>,
}
