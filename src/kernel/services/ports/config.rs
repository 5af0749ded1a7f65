use super::settings::EditorSettings;
use crate::models::edit_history::{DEFAULT_COALESCE_MS, DEFAULT_MAX_DEPTH};
use crate::models::EditHistoryConfig;

#[derive(Clone, Debug)]
pub struct EditorConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub word_wrap: bool,
    pub font_size: f32,
    pub undo_coalesce_ms: u64,
    /// 0 表示不限制；每一步都是整段快照
    pub max_undo: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            window_width: 900.0,
            window_height: 600.0,
            word_wrap: true,
            font_size: 14.0,
            undo_coalesce_ms: DEFAULT_COALESCE_MS,
            max_undo: DEFAULT_MAX_DEPTH,
        }
    }
}

impl EditorConfig {
    pub fn history_config(&self) -> EditHistoryConfig {
        EditHistoryConfig {
            coalesce_ms: self.undo_coalesce_ms,
            max_depth: self.max_undo,
        }
    }

    /// 设置文件中出现的字段覆盖默认值
    pub fn apply(&mut self, settings: &EditorSettings) {
        if let Some(width) = settings.window_width.filter(|w| *w > 0.0) {
            self.window_width = width;
        }
        if let Some(height) = settings.window_height.filter(|h| *h > 0.0) {
            self.window_height = height;
        }
        if let Some(word_wrap) = settings.word_wrap {
            self.word_wrap = word_wrap;
        }
        if let Some(size) = settings.font_size.filter(|s| *s > 0.0) {
            self.font_size = size;
        }
        if let Some(ms) = settings.undo_coalesce_ms {
            self.undo_coalesce_ms = ms;
        }
        if let Some(max) = settings.max_undo {
            self.max_undo = max;
        }
    }
}
