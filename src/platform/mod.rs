// passgen platform abstraction
// Resolves where the settings file lives on Windows, macOS, and Linux.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific configuration directory for passgen.
///
/// - **Linux**: `~/.config/passgen` (or `$XDG_CONFIG_HOME/passgen`)
/// - **macOS**: `~/Library/Application Support/passgen`
/// - **Windows**: `%APPDATA%/passgen`
/// - anything else: `./.passgen`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        PathBuf::from(".passgen")
    }
}
