//! 编辑历史管理（快照模型）
//!
//! 文本控件每次变更都交出整段文本，因此历史直接保存整段快照：
//! - undo 栈保存变更前的文本，redo 栈保存被撤销的文本
//! - 时间窗口内的连续编辑合并为一个撤销步骤
//! - 新编辑会清空 redo 栈

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// 合并连续编辑的默认时间窗口（毫秒）
pub const DEFAULT_COALESCE_MS: u64 = 500;

/// 默认最多保留的撤销快照数
pub const DEFAULT_MAX_DEPTH: usize = 100;

#[derive(Debug, Clone)]
pub struct EditHistoryConfig {
    pub coalesce_ms: u64,
    /// 0 表示不限制
    pub max_depth: usize,
}

impl Default for EditHistoryConfig {
    fn default() -> Self {
        Self {
            coalesce_ms: DEFAULT_COALESCE_MS,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Debug)]
pub struct EditHistory {
    undo: VecDeque<String>,
    redo: Vec<String>,
    last_edit: Option<Instant>,
    config: EditHistoryConfig,
}

impl EditHistory {
    pub fn new(config: EditHistoryConfig) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            last_edit: None,
            config,
        }
    }

    /// 记录一次编辑；`before` 为编辑前的完整文本
    pub fn record(&mut self, before: &str, now: Instant) {
        self.redo.clear();

        let window = Duration::from_millis(self.config.coalesce_ms);
        let coalesce = self
            .last_edit
            .is_some_and(|last| now.saturating_duration_since(last) < window)
            && !self.undo.is_empty();
        self.last_edit = Some(now);
        if coalesce {
            return;
        }

        self.undo.push_back(before.to_string());
        if self.config.max_depth > 0 {
            while self.undo.len() > self.config.max_depth {
                self.undo.pop_front();
            }
        }
    }

    pub fn undo(&mut self, current: &str) -> Option<String> {
        let prev = self.undo.pop_back()?;
        self.redo.push(current.to_string());
        self.last_edit = None;
        Some(prev)
    }

    pub fn redo(&mut self, current: &str) -> Option<String> {
        let next = self.redo.pop()?;
        self.undo.push_back(current.to_string());
        self.last_edit = None;
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
        self.last_edit = None;
    }
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new(EditHistoryConfig::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/edit_history.rs"]
mod tests;
