//! # matrso-core
//!
//! Dense matrices with zero-copy views, a generic element-wise engine and a
//! generalized matrix product for MatRSo.
//!
//! This crate provides:
//!
//! - **Dense matrix** ([`Matrix`]) over a reference-counted [`SharedBuffer`]
//! - **Index maps** ([`IndexMap`]) translating logical to physical coordinates
//! - **Views** (submatrix, selection, transpose) that alias the parent buffer
//! - **Row and column accessors** ([`Line`], [`LineMut`])
//! - **Element-wise engine** ([`element_wise`]) behind all operator overloads
//! - **Matrix product** ([`mat_mul`]) over any pair of `add`/`mul` operators
//!
//! ## Memory Model
//!
//! A matrix is a pair of index maps and two strides layered over a shared
//! buffer. The element at logical `(i, j)` lives at physical offset
//! `row_map[i] * row_stride + col_map[j] * col_stride`. Views share the buffer
//! and carry their own maps, so reshaping one view never disturbs another,
//! while writes through any view are seen by all of them. The buffer is freed
//! when its last matrix is dropped or cleared.
//!
//! Buffers use `Rc` and `RefCell`; matrices are single-threaded (`!Send`).
//! Holding a [`LineMut`] while reading the same buffer through an alias
//! panics rather than racing.
//!
//! ## Quick Start
//!
//! ```
//! use matrso_core::Matrix;
//!
//! let m = Matrix::from_vec(3, 4, (1..=12).collect::<Vec<i32>>());
//!
//! // Views alias the parent
//! let mut block = m.share_submatrix(1, 1, 2, 2);
//! block.set(0, 0, 60);
//! assert_eq!(m.at(1, 1), 60);
//!
//! // Copies do not
//! let copy = m.copy_transpose();
//! assert_eq!(copy.shape(), (4, 3));
//! assert!(!copy.shares_buffer_with(&m));
//! ```
//!
//! ## Element-Wise Operations
//!
//! ```
//! use matrso_core::{element_wise, Matrix};
//!
//! let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
//! let b = Matrix::from_vec(2, 2, vec![4.0, 3.0, 2.0, 1.0]);
//!
//! // Any arity, any result type
//! let blend = element_wise(|(x, y, t)| x * (1.0 - t) + y * t, (&a, &b, 0.25));
//! assert_eq!(blend.at(0, 0), 1.75);
//!
//! // Operator sugar
//! let c = &a + &b * 2.0f64;
//! assert_eq!(c.to_vec(), vec![9.0, 8.0, 7.0, 6.0]);
//! assert_eq!(a.gt(&b).to_vec(), vec![false, false, true, true]);
//! ```
//!
//! ## Matrix Product
//!
//! ```
//! use matrso_core::functional::{multiplies, plus};
//! use matrso_core::{mat_mul, Matrix};
//!
//! let a = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]);
//! let p: Matrix<i32> = mat_mul(plus, multiplies, &a, &a.share_transpose());
//! assert_eq!(p.to_vec(), vec![14, 32, 32, 77]);
//! assert_eq!(a.product(&a.share_transpose()), p);
//! ```
//!
//! ## Error Handling
//!
//! The core operations follow the unchecked contract: a shape disagreement is
//! a programming error caught by debug assertions. Checked `try_*` variants
//! return [`MatrixResult`]:
//!
//! ```
//! use matrso_core::{Matrix, MatrixError};
//!
//! let a = Matrix::<f64>::zeros(2, 3);
//! assert!(matches!(
//!     a.try_product(&a),
//!     Err(MatrixError::InnerDimensionMismatch { lhs_cols: 3, rhs_rows: 2 })
//! ));
//! ```
//!
//! ## Features
//!
//! - `serde`: Serialize matrices as `{ rows, cols, data }` in logical row-major order

#![deny(warnings)]

pub mod arith;
pub mod buffer;
pub mod comparison;
pub mod elementwise;
pub mod error;
pub mod functional;
pub mod index_map;
pub mod matrix;
pub mod product;


pub use buffer::SharedBuffer;
pub use elementwise::{element_wise, try_element_wise, Operand, Operands, Scalar};
pub use error::{MatrixError, MatrixResult};
pub use index_map::IndexMap;
pub use matrix::{Line, LineMut, Matrix};
pub use product::{mat_mul, mat_mul_from, try_mat_mul, Semiring};
