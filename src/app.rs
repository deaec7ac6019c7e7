//! Generator session for passgen.
//!
//! Plays the part of the calling UI: owns the current options and the
//! history ledger, invokes the engines, analyzes passwords and records
//! results. Options are plain values; replacing them never touches the
//! engines, which keep no state between calls.

use crate::managers::history_manager::{HistoryManager, HistoryManagerTrait};
use crate::services::crypto_service::{CryptoService, CryptoServiceTrait};
use crate::services::localization_engine::{LocalizationEngine, LocalizationEngineTrait};
use crate::services::password_engine::{PasswordEngine, PasswordEngineTrait};
use crate::services::strength_analyzer::{StrengthAnalyzer, StrengthAnalyzerTrait};
use crate::services::uuid_engine::{UuidEngine, UuidEngineTrait};
use crate::types::analysis::{LocalAnalysis, StrengthResult};
use crate::types::errors::{CryptoError, LocaleError};
use crate::types::history::HistoryEntry;
use crate::types::options::{GeneratorMode, PasswordOptions, UuidOptions};
use crate::types::settings::GeneratorSettings;

/// Everything the display layer shows after a password generation.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordOutcome {
    pub password: String,
    pub strength: StrengthResult,
    /// `None` when no character class was enabled.
    pub analysis: Option<LocalAnalysis>,
}

/// Result of [`GeneratorSession::generate`].
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome {
    Password(PasswordOutcome),
    Uuids(Vec<String>),
}

/// Caller-side state around the stateless engines.
pub struct GeneratorSession<R = CryptoService> {
    password_engine: PasswordEngine<R>,
    uuid_engine: UuidEngine<R>,
    analyzer: StrengthAnalyzer,
    history: HistoryManager,
    password_options: PasswordOptions,
    uuid_options: UuidOptions,
}

impl GeneratorSession {
    /// Creates a session over the system random source.
    pub fn new(settings: &GeneratorSettings) -> Result<Self, LocaleError> {
        Self::with_sources(CryptoService::new(), CryptoService::new(), settings)
    }
}

impl<R: CryptoServiceTrait> GeneratorSession<R> {
    /// Creates a session whose engines draw from the given sources.
    pub fn with_sources(
        password_source: R,
        uuid_source: R,
        settings: &GeneratorSettings,
    ) -> Result<Self, LocaleError> {
        let locale = LocalizationEngine::with_locale(&settings.language)?;
        Ok(Self {
            password_engine: PasswordEngine::with_source(password_source),
            uuid_engine: UuidEngine::with_source(uuid_source),
            analyzer: StrengthAnalyzer::new(locale),
            history: HistoryManager::new(),
            password_options: settings.password.clamped(),
            uuid_options: settings.uuid.clamped(),
        })
    }

    pub fn password_options(&self) -> PasswordOptions {
        self.password_options
    }

    /// Replaces the password options, clamping length into `[4, 64]`.
    pub fn set_password_options(&mut self, options: PasswordOptions) {
        self.password_options = options.clamped();
    }

    pub fn uuid_options(&self) -> UuidOptions {
        self.uuid_options
    }

    /// Replaces the UUID options, clamping quantity into `[1, 50]`.
    pub fn set_uuid_options(&mut self, options: UuidOptions) {
        self.uuid_options = options.clamped();
    }

    pub fn set_language(&mut self, lang: &str) -> Result<(), LocaleError> {
        self.analyzer.locale_mut().set_locale(lang)
    }

    pub fn locale(&self) -> &LocalizationEngine {
        self.analyzer.locale()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.history.list()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Generates, scores and analyzes a password and records it.
    ///
    /// An empty result (no class enabled) is reported as score 0 / weak with
    /// no analysis and is not recorded.
    pub fn generate_password(&mut self) -> Result<PasswordOutcome, CryptoError> {
        let options = self.password_options;
        let password = self.password_engine.generate(&options)?;

        if password.is_empty() {
            return Ok(PasswordOutcome {
                password,
                strength: StrengthResult::empty(),
                analysis: None,
            });
        }

        let strength = self.analyzer.score(&password);
        let charset_size = self.password_engine.charset_size(&options);
        let analysis = self.analyzer.analyze(&password, charset_size);
        self.history.record_value(&password);

        Ok(PasswordOutcome {
            password,
            strength,
            analysis: Some(analysis),
        })
    }

    /// Generates a UUID batch; only the first UUID is recorded.
    pub fn generate_uuids(&mut self) -> Result<Vec<String>, CryptoError> {
        let uuids = self.uuid_engine.generate(&self.uuid_options)?;
        if let Some(first) = uuids.first() {
            self.history.record_value(first);
        }
        Ok(uuids)
    }

    pub fn generate(&mut self, mode: GeneratorMode) -> Result<GenerationOutcome, CryptoError> {
        match mode {
            GeneratorMode::Password => self.generate_password().map(GenerationOutcome::Password),
            GeneratorMode::Uuid => self.generate_uuids().map(GenerationOutcome::Uuids),
        }
    }
}
