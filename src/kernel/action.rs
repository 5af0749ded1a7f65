use std::path::PathBuf;
use std::time::Instant;

use crate::core::Command;
use crate::kernel::services::ports::DiscardAnswer;

#[derive(Debug, Clone)]
pub enum Action {
    RunCommand(Command),
    /// 文本控件内容变化，携带变化后的完整文本
    TextEdited {
        text: String,
        now: Instant,
    },
    DiscardAnswered(DiscardAnswer),
    OpenPathPicked(Option<PathBuf>),
    SavePathPicked(Option<PathBuf>),
    FileLoaded {
        path: PathBuf,
        content: String,
    },
    FileLoadFailed {
        path: PathBuf,
        error: String,
    },
    FileWritten {
        path: PathBuf,
        revision: u64,
    },
    FileWriteFailed {
        path: PathBuf,
        error: String,
    },
}
