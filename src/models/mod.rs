//! 数据模型层

pub mod edit_history;

pub use edit_history::{EditHistory, EditHistoryConfig};
