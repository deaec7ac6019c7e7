//! Strength Analyzer for passgen.
//!
//! Two independent views of a generated password:
//!
//! - [`StrengthAnalyzer::score`] is an additive point system over length tiers
//!   and the character kinds present.
//! - [`StrengthAnalyzer::analyze`] estimates entropy from charset size and
//!   length, converts it to a brute-force duration and collects tips.
//!
//! The two use different signals and are allowed to disagree: a long
//! lowercase-only password has plenty of entropy but scores only "good".

use crate::services::localization_engine::LocalizationEngine;
use crate::types::analysis::{CrackTime, LocalAnalysis, Strength, StrengthResult, Tip};

/// Offline fast-hash attacker: 100 billion guesses per second.
pub const GUESSES_PER_SECOND: f64 = 100e9;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 31_536_000.0;
const CENTURY: f64 = 3_153_600_000.0;
/// Beyond a thousand centuries the estimate is reported as uncrackable.
const CENTURY_CEILING: f64 = 3_153_600_000_000.0;

/// Passwords shorter than this get the length tip.
const RECOMMENDED_LENGTH: usize = 12;

/// Trait defining password analysis operations.
pub trait StrengthAnalyzerTrait {
    /// Heuristic score and bucket for `password`.
    fn score(&self, password: &str) -> StrengthResult;

    /// Entropy, crack time and tips for `password` drawn from `charset_size` symbols.
    fn analyze(&self, password: &str, charset_size: usize) -> LocalAnalysis;
}

/// Analyzer rendering its results through a localization engine.
#[derive(Debug, Clone)]
pub struct StrengthAnalyzer {
    locale: LocalizationEngine,
}

impl StrengthAnalyzer {
    pub fn new(locale: LocalizationEngine) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> &LocalizationEngine {
        &self.locale
    }

    pub fn locale_mut(&mut self) -> &mut LocalizationEngine {
        &mut self.locale
    }

    /// `length * log2(charset_size)`, or 0 when either is 0.
    pub fn entropy(length: usize, charset_size: usize) -> f64 {
        if length == 0 || charset_size == 0 {
            return 0.0;
        }
        length as f64 * (charset_size as f64).log2()
    }

    /// Buckets the time needed to exhaust `2^entropy` guesses.
    pub fn crack_time(entropy: f64) -> CrackTime {
        let seconds = 2f64.powf(entropy) / GUESSES_PER_SECOND;
        let whole = |unit: f64| (seconds / unit).floor() as u64;

        if seconds < 1.0 {
            CrackTime::Instant
        } else if seconds < MINUTE {
            CrackTime::Seconds(whole(1.0))
        } else if seconds < HOUR {
            CrackTime::Minutes(whole(MINUTE))
        } else if seconds < DAY {
            CrackTime::Hours(whole(HOUR))
        } else if seconds < YEAR {
            CrackTime::Days(whole(DAY))
        } else if seconds < CENTURY {
            CrackTime::Years(whole(YEAR))
        } else if seconds < CENTURY_CEILING {
            CrackTime::Centuries(whole(CENTURY))
        } else {
            CrackTime::Uncrackable
        }
    }

    /// Improvement tips, checked against the password itself.
    pub fn tips(password: &str) -> Vec<Tip> {
        let mut tips = Vec::new();
        if password.chars().count() < RECOMMENDED_LENGTH {
            tips.push(Tip::Length);
        }
        if !has_symbol(password) {
            tips.push(Tip::Symbols);
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            tips.push(Tip::Numbers);
        }
        if tips.is_empty() {
            tips.push(Tip::Perfect);
        }
        tips
    }

    /// Points for `password`; the tiers add up to at most 100.
    pub fn points(password: &str) -> u8 {
        let length = password.chars().count();
        let mut score = 0u8;

        if length >= 8 {
            score += 20;
        }
        if length >= 12 {
            score += 15;
        }
        if length >= 20 {
            score += 15;
        }
        if password.chars().any(|c| c.is_ascii_uppercase()) {
            score += 10;
        }
        if password.chars().any(|c| c.is_ascii_lowercase()) {
            score += 10;
        }
        if password.chars().any(|c| c.is_ascii_digit()) {
            score += 15;
        }
        if has_symbol(password) {
            score += 15;
        }
        score
    }
}

/// Whether anything outside `[A-Za-z0-9]` is present.
fn has_symbol(password: &str) -> bool {
    password.chars().any(|c| !c.is_ascii_alphanumeric())
}

impl StrengthAnalyzerTrait for StrengthAnalyzer {
    fn score(&self, password: &str) -> StrengthResult {
        let score = Self::points(password);
        StrengthResult {
            score,
            strength: Strength::from_score(score),
        }
    }

    fn analyze(&self, password: &str, charset_size: usize) -> LocalAnalysis {
        let entropy = Self::entropy(password.chars().count(), charset_size);
        let crack_time = Self::crack_time(entropy);
        log::trace!("entropy {:.1} bits, crack time {:?}", entropy, crack_time);

        LocalAnalysis {
            entropy,
            cracking_time: self.locale.format_crack_time(&crack_time),
            tips: Self::tips(password)
                .iter()
                .map(|tip| self.locale.tip(tip))
                .collect(),
        }
    }
}
