//! 应用目录
//!
//! 跨平台的数据/配置目录：
//! - macOS: ~/Library/Application Support/zpad/{logs,settings.json}
//! - Linux: $XDG_DATA_HOME/zpad/logs，$XDG_CONFIG_HOME/zpad/settings.json
//! - Windows: %APPDATA%\zpad\{logs,settings.json}

use std::path::PathBuf;

const APP_NAME: &str = "zpad";
const LOG_DIR: &str = "logs";
const SETTINGS_FILE: &str = "settings.json";

/// 获取应用数据目录
fn get_app_data_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        mac_app_support()
    }

    #[cfg(target_os = "linux")]
    {
        xdg_dir("XDG_DATA_HOME", ".local/share")
    }

    #[cfg(target_os = "windows")]
    {
        windows_app_data()
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

/// 获取配置目录
pub fn get_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        mac_app_support()
    }

    #[cfg(target_os = "linux")]
    {
        xdg_dir("XDG_CONFIG_HOME", ".config")
    }

    #[cfg(target_os = "windows")]
    {
        windows_app_data()
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

#[cfg(target_os = "macos")]
fn mac_app_support() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(|home| {
        PathBuf::from(home)
            .join("Library/Application Support")
            .join(APP_NAME)
    })
}

#[cfg(target_os = "linux")]
fn xdg_dir(var: &str, fallback: &str) -> Option<PathBuf> {
    if let Ok(xdg) = std::env::var(var) {
        if !xdg.is_empty() {
            return Some(PathBuf::from(xdg).join(APP_NAME));
        }
    }
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(fallback).join(APP_NAME))
}

#[cfg(target_os = "windows")]
fn windows_app_data() -> Option<PathBuf> {
    std::env::var("APPDATA")
        .ok()
        .map(|appdata| PathBuf::from(appdata).join(APP_NAME))
}

/// 获取日志目录路径
pub fn get_log_dir() -> Option<PathBuf> {
    get_app_data_dir().map(|p| p.join(LOG_DIR))
}

/// 获取设置文件路径（只读，应用从不写入）
pub fn get_settings_path() -> Option<PathBuf> {
    get_config_dir().map(|p| p.join(SETTINGS_FILE))
}

/// 确保日志目录存在
pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = get_log_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine log directory",
        )
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/paths.rs"]
mod tests;
