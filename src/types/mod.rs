// passgen shared type definitions
// Each submodule defines plain value types passed into and out of the engines.

pub mod analysis;
pub mod errors;
pub mod history;
pub mod options;
pub mod settings;
