//! Standard operator overloads
//!
//! Every operator is a one-line adapter over
//! [`element_wise`](crate::element_wise) or
//! [`assign_element_wise`](Matrix::assign_element_wise):
//!
//! - matrix `op` matrix for any element types whose operator is defined,
//!   with owned or borrowed operands
//! - matrix `op` scalar and scalar `op` matrix for the primitive numeric
//!   types (and `bool` for the bitwise operators)
//! - `op=` with a matrix or scalar right-hand side, writing through views
//! - unary `-` and `!`
//!
//! Matrix operands must share one logical shape. Matrix multiplication is
//! [`Matrix::product`], not `*`.
//!
//! ```
//! use matrso_core::Matrix;
//!
//! let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]);
//! let b = &a * 10i32 - &a;
//! assert_eq!(b.to_vec(), vec![9, 18, 27, 36]);
//!
//! let mut c = a.share();
//! c += 1i32;
//! assert_eq!(a.to_vec(), vec![2, 3, 4, 5]);
//! ```

use crate::elementwise::element_wise;
use crate::matrix::Matrix;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

macro_rules! matrix_binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<'a, 'b, T, U> $trait<&'b Matrix<U>> for &'a Matrix<T>
        where
            T: Clone + $trait<U>,
            U: Clone,
        {
            type Output = Matrix<<T as $trait<U>>::Output>;

            fn $method(self, rhs: &'b Matrix<U>) -> Self::Output {
                element_wise(|(a, b)| a $op b, (self, rhs))
            }
        }

        impl<'b, T, U> $trait<&'b Matrix<U>> for Matrix<T>
        where
            T: Clone + $trait<U>,
            U: Clone,
        {
            type Output = Matrix<<T as $trait<U>>::Output>;

            fn $method(self, rhs: &'b Matrix<U>) -> Self::Output {
                &self $op rhs
            }
        }

        impl<'a, T, U> $trait<Matrix<U>> for &'a Matrix<T>
        where
            T: Clone + $trait<U>,
            U: Clone,
        {
            type Output = Matrix<<T as $trait<U>>::Output>;

            fn $method(self, rhs: Matrix<U>) -> Self::Output {
                self $op &rhs
            }
        }

        impl<T, U> $trait<Matrix<U>> for Matrix<T>
        where
            T: Clone + $trait<U>,
            U: Clone,
        {
            type Output = Matrix<<T as $trait<U>>::Output>;

            fn $method(self, rhs: Matrix<U>) -> Self::Output {
                &self $op &rhs
            }
        }

        impl<'b, T> $assign_trait<&'b Matrix<T>> for Matrix<T>
        where
            T: Clone + $trait<Output = T>,
        {
            fn $assign_method(&mut self, rhs: &'b Matrix<T>) {
                self.assign_element_wise(|a, (b,)| a $op b, (rhs,));
            }
        }

        impl<T> $assign_trait<Matrix<T>> for Matrix<T>
        where
            T: Clone + $trait<Output = T>,
        {
            fn $assign_method(&mut self, rhs: Matrix<T>) {
                self.assign_element_wise(|a, (b,)| a $op b, (&rhs,));
            }
        }
    };
}

matrix_binary_op!(Add, add, AddAssign, add_assign, +);
matrix_binary_op!(Sub, sub, SubAssign, sub_assign, -);
matrix_binary_op!(Mul, mul, MulAssign, mul_assign, *);
matrix_binary_op!(Div, div, DivAssign, div_assign, /);
matrix_binary_op!(Rem, rem, RemAssign, rem_assign, %);
matrix_binary_op!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
matrix_binary_op!(BitOr, bitor, BitOrAssign, bitor_assign, |);
matrix_binary_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);
matrix_binary_op!(Shl, shl, ShlAssign, shl_assign, <<);
matrix_binary_op!(Shr, shr, ShrAssign, shr_assign, >>);

macro_rules! scalar_binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt; $($t:ty),+ $(,)?) => {
        $(
            impl<'a> $trait<$t> for &'a Matrix<$t> {
                type Output = Matrix<$t>;

                fn $method(self, rhs: $t) -> Matrix<$t> {
                    element_wise(|(a, b)| a $op b, (self, rhs))
                }
            }

            impl $trait<$t> for Matrix<$t> {
                type Output = Matrix<$t>;

                fn $method(self, rhs: $t) -> Matrix<$t> {
                    &self $op rhs
                }
            }

            impl<'b> $trait<&'b Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn $method(self, rhs: &'b Matrix<$t>) -> Matrix<$t> {
                    element_wise(|(a, b)| a $op b, (self, rhs))
                }
            }

            impl $trait<Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn $method(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    self $op &rhs
                }
            }

            impl $assign_trait<$t> for Matrix<$t> {
                fn $assign_method(&mut self, rhs: $t) {
                    self.assign_element_wise(|a, (b,)| a $op b, (rhs,));
                }
            }
        )+
    };
}

macro_rules! scalar_arithmetic {
    ($($t:ty),+ $(,)?) => {
        scalar_binary_op!(Add, add, AddAssign, add_assign, +; $($t),+);
        scalar_binary_op!(Sub, sub, SubAssign, sub_assign, -; $($t),+);
        scalar_binary_op!(Mul, mul, MulAssign, mul_assign, *; $($t),+);
        scalar_binary_op!(Div, div, DivAssign, div_assign, /; $($t),+);
        scalar_binary_op!(Rem, rem, RemAssign, rem_assign, %; $($t),+);
    };
}

macro_rules! scalar_bitwise {
    ($($t:ty),+ $(,)?) => {
        scalar_binary_op!(BitAnd, bitand, BitAndAssign, bitand_assign, &; $($t),+);
        scalar_binary_op!(BitOr, bitor, BitOrAssign, bitor_assign, |; $($t),+);
        scalar_binary_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^; $($t),+);
    };
}

macro_rules! scalar_shift {
    ($($t:ty),+ $(,)?) => {
        scalar_binary_op!(Shl, shl, ShlAssign, shl_assign, <<; $($t),+);
        scalar_binary_op!(Shr, shr, ShrAssign, shr_assign, >>; $($t),+);
    };
}

scalar_arithmetic!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
scalar_bitwise!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool);
scalar_shift!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<'a, T> Neg for &'a Matrix<T>
where
    T: Clone + Neg,
{
    type Output = Matrix<T::Output>;

    fn neg(self) -> Self::Output {
        element_wise(|(a,)| -a, (self,))
    }
}

impl<T> Neg for Matrix<T>
where
    T: Clone + Neg,
{
    type Output = Matrix<T::Output>;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<'a, T> Not for &'a Matrix<T>
where
    T: Clone + Not,
{
    type Output = Matrix<T::Output>;

    /// Bitwise complement for integers, logical negation for `bool`
    fn not(self) -> Self::Output {
        element_wise(|(a,)| !a, (self,))
    }
}

impl<T> Not for Matrix<T>
where
    T: Clone + Not,
{
    type Output = Matrix<T::Output>;

    fn not(self) -> Self::Output {
        !&self
    }
}

impl<T> Matrix<T> {
    /// `true` where a cell equals `T::default()` (zero for numbers)
    ///
    /// ```
    /// use matrso_core::Matrix;
    ///
    /// let m = Matrix::from_vec(1, 3, vec![0, 7, 0]);
    /// assert_eq!(m.logical_not().to_vec(), vec![true, false, true]);
    /// ```
    pub fn logical_not(&self) -> Matrix<bool>
    where
        T: Clone + Default + PartialEq,
    {
        let zero = T::default();
        self.map(|x| x == zero)
    }
}
