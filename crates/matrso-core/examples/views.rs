//! Matrix views and aliasing examples.
//!
//! This example demonstrates:
//! - Shared views over one buffer and their reference counts
//! - In-place, copied and shared submatrices
//! - Transposed views and row/column accessors
//! - Per-view row and column swaps
//!
//! Run with:
//! ```bash
//! cargo run --example views
//! ```

use matrso_core::Matrix;

fn main() {
    println!("=== MatRSo Core: Views and Aliasing ===\n");

    // Example 1: Sharing a buffer
    example_sharing();

    // Example 2: Submatrices three ways
    example_submatrices();

    // Example 3: Transposes and line accessors
    example_transpose();

    // Example 4: Swaps are local to a view
    example_swaps();

    println!("\n=== All examples completed successfully! ===");
}

fn example_sharing() {
    println!("--- Example 1: Sharing a Buffer ---");

    let mut m = Matrix::from_vec(3, 4, (1..=12).collect::<Vec<i32>>());
    println!("Original matrix [3, 4]:\n{:3}", m);
    println!("  Reference count: {}", m.reference_count());

    let view = m.share();
    let copy = m.clone();
    println!("\nAfter share() and clone():");
    println!("  Reference count: {}", m.reference_count());
    println!("  Copy shares buffer: {}", copy.shares_buffer_with(&m));

    m.set(0, 0, 100);
    println!("\nAfter m(0, 0) = 100:");
    println!("  view(0, 0) = {}", view.at(0, 0));
    println!("  copy(0, 0) = {}", copy.at(0, 0));

    m.clear();
    println!("\nAfter m.clear():");
    println!("  m is empty: {}", m.is_empty());
    println!("  view reference count: {}", view.reference_count());

    println!();
}

fn example_submatrices() {
    println!("--- Example 2: Submatrices ---");

    let base = Matrix::from_vec(4, 4, (1..=16).collect::<Vec<i32>>());
    println!("Base [4, 4]:\n{:3}", base);

    let mut in_place = base.share();
    in_place.submatrix(1, 1, 2, 2);
    println!("\nIn-place submatrix(1, 1, 2, 2):\n{:3}", in_place);
    println!("  Physical size still: {}", in_place.size());

    let copied = base.copy_submatrix(0, 2, 2, 2);
    println!("\nCopied block at (0, 2):\n{:3}", copied);
    println!("  Physical size: {}", copied.size());

    let mut shared = base.share_submatrix(2, 0, 2, 4);
    shared.set(0, 0, -9);
    println!("\nShared block at (2, 0) after setting (0, 0) = -9:");
    println!("  base(2, 0) = {}", base.at(2, 0));

    let corners = base.share_submatrix_select(&[0, 3], &[0, 3]);
    println!("\nCorners via retain lists:\n{:3}", corners);

    match base.try_share_submatrix(3, 3, 2, 2) {
        Ok(_) => println!("\nUnexpected success!"),
        Err(e) => println!("\nExpected error for out-of-range block: {}", e),
    }

    println!();
}

fn example_transpose() {
    println!("--- Example 3: Transposes and Line Accessors ---");

    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let t = m.share_transpose();
    println!("Matrix [2, 3]:\n{:4.1}", m);
    println!("\nShared transpose [3, 2]:\n{:4.1}", t);
    println!("  Strides: row {} col {}", t.row_stride(), t.col_stride());

    let c = m.copy_transpose();
    println!("\nCopied transpose strides: row {} col {}", c.row_stride(), c.col_stride());

    let mut m = m;
    m.col_mut(1).fill(0.0);
    println!("\nAfter zeroing column 1 of the original:");
    println!("  Transpose row 1: {:?}", t.row(1).to_vec());

    for (i, row) in t.iter_rows().enumerate() {
        let sum: f64 = row.iter().sum();
        println!("  Transpose row {} sum: {}", i, sum);
    }

    println!();
}

fn example_swaps() {
    println!("--- Example 4: Swaps Are Local ---");

    let m = Matrix::from_vec(3, 3, (1..=9).collect::<Vec<i32>>());
    let mut permuted = m.share();
    permuted.swap_rows(0, 2).swap_cols(0, 1);

    println!("Original:\n{:2}", m);
    println!("\nPermuted view:\n{:2}", permuted);
    println!("  Row map: {:?}", permuted.row_map().as_slice());
    println!("  Col map: {:?}", permuted.col_map().as_slice());
    println!("  Original row map unchanged: {:?}", m.row_map().as_slice());
}
