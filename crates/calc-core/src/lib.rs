pub mod backlog;
pub mod error;
pub mod fixed;
pub mod flags;
pub mod ops;
pub mod toggle;

pub use error::{CalcError, Result};
