use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub editor: EditorSettings,
    #[serde(default)]
    pub keybindings: Vec<KeybindingRule>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditorSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_height: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_wrap: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub undo_coalesce_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_undo: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeybindingRule {
    pub key: String,
    /// 为空字符串时表示解除该按键的绑定
    pub command: String,
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
