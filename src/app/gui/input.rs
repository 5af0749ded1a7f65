//! egui 按键 → 内部 Key

use crate::core::event::{Key, KeyCode, KeyModifiers};
use eframe::egui;

pub fn key_from_egui(key: egui::Key, modifiers: egui::Modifiers) -> Option<Key> {
    let code = match key {
        egui::Key::Enter => KeyCode::Enter,
        egui::Key::Tab => KeyCode::Tab,
        egui::Key::Backspace => KeyCode::Backspace,
        egui::Key::Delete => KeyCode::Delete,
        egui::Key::Escape => KeyCode::Esc,
        egui::Key::ArrowLeft => KeyCode::Left,
        egui::Key::ArrowRight => KeyCode::Right,
        egui::Key::ArrowUp => KeyCode::Up,
        egui::Key::ArrowDown => KeyCode::Down,
        egui::Key::Home => KeyCode::Home,
        egui::Key::End => KeyCode::End,
        egui::Key::PageUp => KeyCode::PageUp,
        egui::Key::PageDown => KeyCode::PageDown,
        egui::Key::Space => KeyCode::Char(' '),
        other => code_from_name(other.name())?,
    };
    Some(Key::new(code, modifiers_from_egui(modifiers)))
}

fn code_from_name(name: &str) -> Option<KeyCode> {
    let mut chars = name.chars();
    let first = chars.next()?;
    if chars.next().is_none() {
        return Some(KeyCode::Char(first.to_ascii_lowercase()));
    }
    let n = name.strip_prefix('F')?.parse::<u8>().ok()?;
    Some(KeyCode::F(n))
}

/// `command` 在 macOS 上是 Cmd，其它平台是 Ctrl，统一映射为 CONTROL
fn modifiers_from_egui(modifiers: egui::Modifiers) -> KeyModifiers {
    let mut out = KeyModifiers::NONE;
    if modifiers.command || modifiers.ctrl {
        out |= KeyModifiers::CONTROL;
    }
    if modifiers.shift {
        out |= KeyModifiers::SHIFT;
    }
    if modifiers.alt {
        out |= KeyModifiers::ALT;
    }
    out
}

#[cfg(test)]
#[path = "../../../tests/unit/app/gui/input.rs"]
mod tests;
