//! # MatRSo - Shared-View Matrices for COOLJAPAN
//!
//! Dense matrices whose submatrices and transposes are zero-copy views over a
//! reference-counted buffer, with a generic element-wise engine and a matrix
//! product over arbitrary `add`/`mul` operators.
//!
//! **Version:** 0.1.0-alpha.1
//!
//! This is the **meta crate** that re-exports the MatRSo components for
//! convenient access.
//!
//! ## Quick Start
//!
//! ```
//! use matrso::prelude::*;
//!
//! let m = Matrix::from_vec(3, 4, (1..=12).collect::<Vec<i32>>());
//! let shifted = &m + 5i32;
//! assert_eq!(shifted.row(0).to_vec(), vec![6, 7, 8, 9]);
//!
//! let block = m.try_share_submatrix(1, 1, 2, 2)?;
//! assert_eq!(block.reference_count(), 2);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Components
//!
//! ### Core Matrix ([`core`])
//!
//! Matrix type, index maps, views, accessors, the element-wise and product
//! engines and the operator helpers.
//!
//! ```
//! use matrso::core::functional::{logical_and, logical_or};
//! use matrso::core::{mat_mul, Matrix};
//!
//! let a = Matrix::from_vec(2, 2, vec![true, false, false, true]);
//! let reach = mat_mul(logical_or, logical_and, &a, &a);
//! assert_eq!(reach, a);
//! ```
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization support
//!
//! ## Documentation
//!
//! - [GitHub Repository](https://github.com/cool-japan/matrso)

#![deny(warnings)]

// Re-export all components
pub use matrso_core as core;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! # Example
    //!
    //! ```
    //! use matrso::prelude::*;
    //!
    //! let m = Matrix::<f64>::zeros(10, 20);
    //! let p = mat_mul(plus, multiplies, &m, &m.share_transpose());
    //! assert_eq!(p.shape(), (10, 10));
    //! ```

    // Core types
    pub use crate::core::{IndexMap, Line, LineMut, Matrix, MatrixError, MatrixResult, Scalar};

    // Engines
    pub use crate::core::{element_wise, mat_mul, mat_mul_from, Semiring};

    // Common operator helpers
    pub use crate::core::functional::{
        logical_and, logical_or, max, min, minus, multiplies, plus,
    };
}
