// passgen services
// Services provide the core functionality: secure randomness, generation, analysis, settings, localization.

pub mod crypto_service;
pub mod localization_engine;
pub mod password_engine;
pub mod settings_engine;
pub mod strength_analyzer;
pub mod uuid_engine;
