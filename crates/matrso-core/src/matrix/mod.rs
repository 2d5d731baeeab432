//! Dense matrix implementation and operations
//!
//! The `Matrix<T>` type is defined in [`types`]; the remaining modules add
//! accessors, views, constructors and text conversion.

// Core type definition
pub mod types;

// Operation modules
mod creation;
mod format;
pub mod line;
mod views;

#[cfg(feature = "serde")]
mod serde_impl;

pub use line::{Line, LineMut};
pub use types::Matrix;
