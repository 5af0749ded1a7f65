//! Headless application core (state/action/effect).

pub mod action;
pub mod effect;
pub mod error;
pub mod services;
pub mod state;
pub mod store;

pub use action::Action;
pub use effect::{EditPassthrough, Effect};
pub use error::ShellError;
pub use state::{
    window_title, AbortReason, AppState, ConfirmDialogState, DiscardOutcome, DocumentState,
    PendingAction, SaveFlow, UiState, APP_NAME,
};
pub use store::{DispatchResult, Store};
