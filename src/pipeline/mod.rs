//! Pipeline module - loading, diagnosis and the imputation strategies

pub mod describe;
pub mod error;
pub mod impute;
pub mod loader;
pub mod missing;
pub mod ordered;
pub mod stats;

pub use describe::*;
pub use error::*;
pub use impute::*;
pub use loader::*;
pub use missing::*;
pub use ordered::*;
