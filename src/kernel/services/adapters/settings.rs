use crate::core::event::{Key, KeyCode, KeyModifiers};
use crate::kernel::services::ports::settings::Settings;
use std::path::Path;

use super::paths::get_settings_path;

/// 读取用户设置；文件不存在或无法解析时返回 None
pub fn load_settings() -> Option<Settings> {
    let path = get_settings_path()?;
    load_settings_from(&path)
}

pub fn load_settings_from(path: &Path) -> Option<Settings> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "settings unreadable");
            return None;
        }
    };
    match serde_json::from_str(&data) {
        Ok(settings) => {
            tracing::info!(path = %path.display(), "settings loaded");
            Some(settings)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "settings invalid, using defaults");
            None
        }
    }
}

pub fn parse_keybinding(value: &str) -> Option<Key> {
    let mut modifiers = KeyModifiers::NONE;
    let mut key_part: Option<&str> = None;
    for part in value.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        match part.to_ascii_lowercase().as_str() {
            // 与窗口层一致：macOS 的 Cmd 视同 Ctrl
            "ctrl" | "control" | "cmd" | "command" | "super" | "meta" => {
                modifiers |= KeyModifiers::CONTROL
            }
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" | "option" => modifiers |= KeyModifiers::ALT,
            _ => {
                if key_part.is_some() {
                    return None;
                }
                key_part = Some(part)
            }
        }
    }
    let code = parse_key_code(key_part?)?;
    Some(Key::new(code, modifiers))
}

fn parse_key_code(value: &str) -> Option<KeyCode> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    let v_lc = v.to_ascii_lowercase();
    let code = match v_lc.as_str() {
        "enter" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        _ if v_lc.len() > 1 && v_lc.starts_with('f') => {
            let n = v_lc.strip_prefix('f')?.parse::<u8>().ok()?;
            KeyCode::F(n)
        }
        _ => {
            let mut chars = v.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(ch)
        }
    };

    Some(code)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/settings.rs"]
mod tests;
