// passgen platform paths for Windows
// Config: %APPDATA%\passgen

use std::env;
use std::path::PathBuf;

/// Uses `%APPDATA%\passgen`, falling back to `%USERPROFILE%\AppData\Roaming\passgen`.
pub fn get_config_dir() -> PathBuf {
    match env::var("APPDATA") {
        Ok(appdata) => PathBuf::from(appdata).join("passgen"),
        Err(_) => {
            let profile = env::var("USERPROFILE").unwrap_or_else(|_| String::from("C:\\"));
            PathBuf::from(profile)
                .join("AppData")
                .join("Roaming")
                .join("passgen")
        }
    }
}
