//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types used across the app (kernel-facing).
//! - `adapters`: OS specific implementations (file system, dialogs, clipboard).

pub mod adapters;
pub mod ports;
