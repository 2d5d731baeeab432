//! Text formatting and parsing
//!
//! Matrices print as one line per row with cells separated by a single space.
//! Formatter options (width, precision, fill, alignment, sign) apply to
//! every cell, so `format!("{:3}", m)` pads each cell to three columns with
//! the element type's default alignment.

use super::types::Matrix;
use crate::error::{MatrixError, MatrixResult};
use std::fmt;
use std::str::FromStr;

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    /// # Examples
    ///
    /// ```
    /// use matrso_core::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 2, vec![1, 20, 300, 4]);
    /// assert_eq!(format!("{:3}", m), "  1  20\n300   4");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                fmt::Display::fmt(value, f)?;
            }
        }
        Ok(())
    }
}

fn parse_token<T>(token: &str, row: usize, col: usize) -> MatrixResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    token.parse().map_err(|e: T::Err| MatrixError::Parse {
        token: token.to_string(),
        row,
        col,
        message: e.to_string(),
    })
}

impl<T> Matrix<T> {
    /// Fill the existing logical cells from whitespace-separated text
    ///
    /// Tokens are consumed in row-major order; line breaks carry no meaning.
    /// Surplus tokens are ignored. On error, cells read so far keep their new
    /// values.
    ///
    /// # Examples
    ///
    /// ```
    /// use matrso_core::Matrix;
    ///
    /// let mut m = Matrix::<i32>::new(2, 2);
    /// m.read_from("1 2\n3 4").unwrap();
    /// assert_eq!(m.to_vec(), vec![1, 2, 3, 4]);
    /// ```
    pub fn read_from(&mut self, text: &str) -> MatrixResult<()>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let (rows, cols) = self.shape();
        let mut tokens = text.split_whitespace();
        for i in 0..rows {
            for j in 0..cols {
                let token = tokens.next().ok_or(MatrixError::InsufficientData {
                    expected: rows * cols,
                    found: i * cols + j,
                })?;
                let value = parse_token(token, i, j)?;
                self.set(i, j, value);
            }
        }
        Ok(())
    }
}

impl<T> FromStr for Matrix<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Err = MatrixError;

    /// Parse one matrix row per non-blank line; the shape is inferred
    fn from_str(s: &str) -> MatrixResult<Self> {
        let mut data = Vec::new();
        let mut cols = None;
        let mut rows = 0;
        for line in s.lines().filter(|line| !line.trim().is_empty()) {
            let before = data.len();
            for (j, token) in line.split_whitespace().enumerate() {
                data.push(parse_token(token, rows, j)?);
            }
            let found = data.len() - before;
            match cols {
                None => cols = Some(found),
                Some(expected) if expected != found => {
                    return Err(MatrixError::RaggedRows {
                        row: rows,
                        expected,
                        found,
                    })
                }
                Some(_) => {}
            }
            rows += 1;
        }
        Ok(Self::from_shape_vec(rows, cols.unwrap_or(0), data))
    }
}
