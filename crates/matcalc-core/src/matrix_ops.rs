//! Element-wise algebra, quadrant splitting, and padding helpers.
//!
//! Arithmetic wraps on overflow so every algorithm computes the same result
//! modulo 2^32 regardless of how it groups its sums.

use crate::calculator::MatError;
use crate::matrix_types::Matrix;

/// The four equal-size blocks of an even-sized matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quadrants {
    pub q11: Matrix,
    pub q12: Matrix,
    pub q21: Matrix,
    pub q22: Matrix,
}

fn check_same_size(a: &Matrix, b: &Matrix) -> Result<(), MatError> {
    if a.size() == b.size() {
        Ok(())
    } else {
        Err(MatError::SizeMismatch {
            left: a.size(),
            right: b.size(),
        })
    }
}

fn zip_with(a: &Matrix, b: &Matrix, f: impl Fn(i32, i32) -> i32) -> Result<Matrix, MatError> {
    check_same_size(a, b)?;
    let mut out = Matrix::zeros(a.size())?;
    for ((o, &x), &y) in out
        .as_mut_slice()
        .iter_mut()
        .zip(a.as_slice())
        .zip(b.as_slice())
    {
        *o = f(x, y);
    }
    Ok(out)
}

/// `a + b`, element-wise.
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix, MatError> {
    zip_with(a, b, i32::wrapping_add)
}

/// `a - b`, element-wise.
pub fn sub(a: &Matrix, b: &Matrix) -> Result<Matrix, MatError> {
    zip_with(a, b, i32::wrapping_sub)
}

/// `acc += other`, element-wise.
pub fn add_assign(acc: &mut Matrix, other: &Matrix) -> Result<(), MatError> {
    check_same_size(acc, other)?;
    for (x, &y) in acc.as_mut_slice().iter_mut().zip(other.as_slice()) {
        *x = x.wrapping_add(y);
    }
    Ok(())
}

/// `acc -= other`, element-wise.
pub fn sub_assign(acc: &mut Matrix, other: &Matrix) -> Result<(), MatError> {
    check_same_size(acc, other)?;
    for (x, &y) in acc.as_mut_slice().iter_mut().zip(other.as_slice()) {
        *x = x.wrapping_sub(y);
    }
    Ok(())
}

/// Split an even-sized matrix into its quadrants over `[0, n/2)` and `[n/2, n)`.
pub fn split_quadrants(m: &Matrix) -> Result<Quadrants, MatError> {
    let n = m.size();
    debug_assert!(n % 2 == 0, "quadrant split requires an even size, got {n}");
    let half = n / 2;

    let mut q = Quadrants {
        q11: Matrix::zeros(half)?,
        q12: Matrix::zeros(half)?,
        q21: Matrix::zeros(half)?,
        q22: Matrix::zeros(half)?,
    };
    for r in 0..half {
        let (left, right) = m.row(r).split_at(half);
        q.q11.row_mut(r).copy_from_slice(left);
        q.q12.row_mut(r).copy_from_slice(right);

        let (left, right) = m.row(r + half).split_at(half);
        q.q21.row_mut(r).copy_from_slice(left);
        q.q22.row_mut(r).copy_from_slice(right);
    }
    Ok(q)
}

/// Place four equal-size blocks into one matrix of twice the size.
pub fn join_quadrants(q: &Quadrants) -> Result<Matrix, MatError> {
    let half = q.q11.size();
    for other in [&q.q12, &q.q21, &q.q22] {
        check_same_size(&q.q11, other)?;
    }

    let mut out = Matrix::zeros(half * 2)?;
    for r in 0..half {
        let (left, right) = out.row_mut(r).split_at_mut(half);
        left.copy_from_slice(q.q11.row(r));
        right.copy_from_slice(q.q12.row(r));

        let (left, right) = out.row_mut(r + half).split_at_mut(half);
        left.copy_from_slice(q.q21.row(r));
        right.copy_from_slice(q.q22.row(r));
    }
    Ok(out)
}

/// Copy `m` into the top-left corner of a zero matrix of `new_size`.
pub fn pad_to(m: &Matrix, new_size: usize) -> Result<Matrix, MatError> {
    let n = m.size();
    if new_size < n {
        return Err(MatError::SizeMismatch {
            left: n,
            right: new_size,
        });
    }
    let mut out = Matrix::zeros(new_size)?;
    for r in 0..n {
        out.row_mut(r)[..n].copy_from_slice(m.row(r));
    }
    Ok(out)
}

/// Extract the top-left `size x size` block.
pub fn top_left(m: &Matrix, size: usize) -> Result<Matrix, MatError> {
    if size > m.size() {
        return Err(MatError::SizeMismatch {
            left: m.size(),
            right: size,
        });
    }
    let mut out = Matrix::zeros(size)?;
    for r in 0..size {
        out.row_mut(r).copy_from_slice(&m.row(r)[..size]);
    }
    Ok(out)
}
