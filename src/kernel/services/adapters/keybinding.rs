//! 快捷键：按键 → 命令

use super::settings::parse_keybinding;
use crate::core::event::{Key, KeyCode};
use crate::core::Command;
use crate::kernel::services::ports::KeybindingRule;
use rustc_hash::FxHashMap;

pub struct KeybindingService {
    bindings: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn with_defaults() -> Self {
        Self {
            bindings: default_keybindings(),
        }
    }

    pub fn resolve(&self, key: &Key) -> Option<Command> {
        self.bindings.get(key).copied()
    }

    pub fn bindings(&self) -> &FxHashMap<Key, Command> {
        &self.bindings
    }

    pub fn bind(&mut self, key: Key, command: Command) {
        self.bindings.insert(key, command);
    }

    pub fn unbind(&mut self, key: &Key) -> Option<Command> {
        self.bindings.remove(key)
    }

    /// 应用设置文件中的规则，返回成功应用的条数
    pub fn apply_rules(&mut self, rules: &[KeybindingRule]) -> usize {
        let mut applied = 0;
        for rule in rules {
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "invalid keybinding");
                continue;
            };
            if rule.command.trim().is_empty() {
                self.unbind(&key);
                applied += 1;
                continue;
            }
            match Command::from_name(&rule.command) {
                Some(command) if command.is_clipboard_command() => {
                    tracing::warn!(
                        key = %rule.key,
                        command = %rule.command,
                        "clipboard commands use the platform shortcuts"
                    );
                }
                Some(command) => {
                    self.bind(key, command);
                    applied += 1;
                }
                None => {
                    tracing::warn!(command = %rule.command, "unknown command in keybinding");
                }
            }
        }
        applied
    }

    /// 菜单上显示的快捷键文本
    pub fn accelerator(&self, command: Command) -> Option<String> {
        if let Some(native) = native_clipboard_key(command) {
            return Some(native.to_string());
        }
        self.bindings
            .iter()
            .filter(|(_, c)| **c == command)
            .map(|(key, _)| *key)
            .min_by_key(|key| (key.modifiers.bits().count_ones(), key.to_string()))
            .map(|key| key.to_string())
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

/// Cut/Copy/Paste 由文本控件原生处理，这里只用于显示
fn native_clipboard_key(command: Command) -> Option<Key> {
    match command {
        Command::Cut => Some(Key::ctrl(KeyCode::Char('x'))),
        Command::Copy => Some(Key::ctrl(KeyCode::Char('c'))),
        Command::Paste => Some(Key::ctrl(KeyCode::Char('v'))),
        _ => None,
    }
}

fn default_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(8);

    bindings.insert(Key::ctrl(KeyCode::Char('n')), Command::NewFile);
    bindings.insert(Key::ctrl(KeyCode::Char('o')), Command::OpenFile);
    bindings.insert(Key::ctrl(KeyCode::Char('s')), Command::Save);
    bindings.insert(Key::ctrl_shift(KeyCode::Char('s')), Command::SaveAs);

    bindings.insert(Key::ctrl(KeyCode::Char('z')), Command::Undo);
    bindings.insert(Key::ctrl(KeyCode::Char('y')), Command::Redo);

    bindings
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/keybinding.rs"]
mod tests;
