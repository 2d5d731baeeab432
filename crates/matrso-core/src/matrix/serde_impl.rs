//! Serde support (feature `serde`)
//!
//! A matrix serializes as `{ rows, cols, data }` with `data` holding the
//! logical cells in row-major order. Views serialize their visible cells
//! only; deserializing always yields a fresh, unshared matrix.

use super::types::Matrix;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize, Deserialize)]
struct MatrixRepr<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Serialize + Clone> Serialize for Matrix<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        MatrixRepr {
            rows: self.rows(),
            cols: self.cols(),
            data: self.to_vec(),
        }
        .serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Matrix<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = MatrixRepr::<T>::deserialize(deserializer)?;
        let expected = repr.rows.checked_mul(repr.cols);
        if expected != Some(repr.data.len()) {
            return Err(D::Error::custom(format!(
                "a {}x{} matrix needs {} values, got {}",
                repr.rows,
                repr.cols,
                repr.rows.saturating_mul(repr.cols),
                repr.data.len()
            )));
        }
        Ok(Matrix::from_shape_vec(repr.rows, repr.cols, repr.data))
    }
}
