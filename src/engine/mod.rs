//! Dispatch engine: resolution and launch fanned out over a bounded worker pool.

pub mod dispatch;

pub use dispatch::{Dispatcher, available_workers, effective_workers};
