//! Element-wise operators and generalized products.
//!
//! This example demonstrates:
//! - Scalar and matrix arithmetic through operator overloads
//! - Custom multi-operand operations with `element_wise`
//! - Comparisons producing boolean masks
//! - Conventional, boolean and tropical matrix products
//!
//! Run with:
//! ```bash
//! cargo run --example operators
//! ```

use matrso_core::functional::{logical_and, logical_or, min, multiplies, plus};
use matrso_core::{element_wise, mat_mul, mat_mul_from, Matrix};

fn main() {
    println!("=== MatRSo Core: Operators and Products ===\n");

    // Example 1: Operator overloads
    example_arithmetic();

    // Example 2: Custom element-wise operations
    example_element_wise();

    // Example 3: Matrix products
    example_products();

    println!("\n=== All examples completed successfully! ===");
}

fn example_arithmetic() {
    println!("--- Example 1: Arithmetic ---");

    let m1 = Matrix::from_vec(3, 4, (1..=12).collect::<Vec<i32>>());
    println!("M1:\n{:3}", m1);
    println!("\nM1 + 5:\n{:3}", &m1 + 5i32);
    println!("\nM1 - 5:\n{:3}", &m1 - 5i32);
    println!("\n2 * M1 - M1:\n{:3}", 2i32 * &m1 - &m1);
    println!("\n-M1 % 5:\n{:3}", -&m1 % 5i32);

    let mut row = m1.share_submatrix(0, 0, 1, 4);
    row <<= 2i32;
    println!("\nAfter shifting row 0 of a view left by 2:\n{:3}", m1);

    println!();
}

fn example_element_wise() {
    println!("--- Example 2: Element-Wise Engine ---");

    let a = Matrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64);
    let b = a.share_transpose();

    let lerp = element_wise(|(x, y, t)| x + (y - x) * t, (&a, &b, 0.5));
    println!("Halfway between A and A^T:\n{:5.1}", lerp);

    let above = a.gt(&b);
    println!("\nA > A^T:\n{:5}", above);
    println!("  Cells above the diagonal: {}", above.count_if(|&x| x));

    let labels = element_wise(
        |(x, big)| if x > big { "big" } else { "small" },
        (&a, 4.0),
    );
    println!("\nLabels:\n{:5}", labels);

    println!();
}

fn example_products() {
    println!("--- Example 3: Products ---");

    let m1 = Matrix::from_vec(3, 4, (1..=12).collect::<Vec<i32>>());
    let m2 = Matrix::from_vec(4, 3, (1..=12).collect::<Vec<i32>>());
    let product: Matrix<i32> = mat_mul(plus, multiplies, &m1, &m2);
    println!("M1 x M2 (plus, multiplies):\n{:4}", product);

    let nonzero1 = m1.map(|x| x != 0);
    let nonzero2 = m2.map(|x| x != 0);
    let reach = mat_mul(logical_or, logical_and, &nonzero1, &nonzero2);
    println!("\nBoolean product (or, and):\n{:5}", reach);

    let inf = u32::MAX / 2;
    let dist = Matrix::from_vec(3, 3, vec![0, 4, inf, inf, 0, 1, 2, inf, 0]);
    let two_hops = mat_mul_from(inf, min, plus, &dist, &dist);
    println!("\nShortest paths of at most two hops (min, plus):\n{:10}", two_hops);

    match m1.try_product(&m1) {
        Ok(_) => println!("\nUnexpected success!"),
        Err(e) => println!("\nExpected error for M1 x M1: {}", e),
    }
}
