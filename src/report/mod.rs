//! Report module - rendering tables and summaries for the terminal

pub mod describe;
pub mod format;
pub mod preview;
pub mod summary;

pub use describe::*;
pub use format::*;
pub use preview::*;
pub use summary::*;
