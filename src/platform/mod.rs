// SideTabs platform abstraction
// Provides platform-specific paths for the persisted store and theme cache.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific path at compile time.

use std::env;
use std::path::PathBuf;

/// Returns the platform-specific configuration directory for SideTabs.
///
/// - **Linux**: `~/.config/sidetabs` (or `$XDG_CONFIG_HOME/sidetabs`)
/// - **macOS**: `~/Library/Application Support/SideTabs`
/// - **Windows**: `%APPDATA%/SideTabs`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        match env::var("XDG_CONFIG_HOME") {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir).join("sidetabs"),
            _ => home_dir().join(".config").join("sidetabs"),
        }
    }
    #[cfg(target_os = "macos")]
    {
        home_dir()
            .join("Library")
            .join("Application Support")
            .join("SideTabs")
    }
    #[cfg(target_os = "windows")]
    {
        match env::var("APPDATA") {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir).join("SideTabs"),
            _ => home_dir().join("SideTabs"),
        }
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        home_dir().join(".sidetabs")
    }
}

/// Returns the platform-specific cache directory for SideTabs.
///
/// - **Linux**: `~/.cache/sidetabs` (or `$XDG_CACHE_HOME/sidetabs`)
/// - **macOS**: `~/Library/Caches/SideTabs`
/// - **Windows**: `%LOCALAPPDATA%/SideTabs/cache`
pub fn get_cache_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        match env::var("XDG_CACHE_HOME") {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir).join("sidetabs"),
            _ => home_dir().join(".cache").join("sidetabs"),
        }
    }
    #[cfg(target_os = "macos")]
    {
        home_dir().join("Library").join("Caches").join("SideTabs")
    }
    #[cfg(target_os = "windows")]
    {
        match env::var("LOCALAPPDATA") {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir).join("SideTabs").join("cache"),
            _ => home_dir().join("SideTabs").join("cache"),
        }
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        home_dir().join(".sidetabs").join("cache")
    }
}

fn home_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    let var = "USERPROFILE";
    #[cfg(not(target_os = "windows"))]
    let var = "HOME";

    match env::var(var) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from("."),
    }
}
