//! The quadratic gadget.
//!
//! The packed integer's decimal digits are cut into three chunks which are
//! read as the coefficients of `ax² + bx + c = 0`. The magnitudes of the two
//! roots (or of the real and imaginary parts of a complex pair) are packed
//! into a second 64-bit integer that the finalizer mixes back in.
//!
//! All arithmetic is `i64` with two's-complement wrapping; division truncates
//! toward zero.

use serde::Serialize;

use crate::error::DegenerateQuadratic;

/// Scale separating the real part from the imaginary part in the packed
/// quad integer. Imaginary parts of seven or more digits bleed into the real
/// part's slots.
pub const ROOT_PACK_SCALE: i64 = 1_000_000;

/// Coefficients cut from the packed integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chunks {
    pub a: i64,
    pub b: i64,
    pub c: i64,
}

/// Non-negative root magnitudes.
///
/// For complex roots `real` is the shared real part and `imag` the
/// imaginary magnitude. For real roots `real` holds the smaller root and
/// `imag` the larger one, both taken as absolute values afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Roots {
    pub real: i64,
    pub imag: i64,
}

impl Roots {
    /// Pack both magnitudes as `real * 1_000_000 + imag`.
    pub fn pack(self) -> i64 {
        self.real
            .wrapping_mul(ROOT_PACK_SCALE)
            .wrapping_add(self.imag)
    }
}

/// Integer square root by Newton's method, `floor(sqrt(n))`.
///
/// Non-positive inputs are returned unchanged, so `isqrt(0) == 0`.
pub fn isqrt(n: i64) -> i64 {
    if n <= 0 {
        return n;
    }

    let mut x = n;
    // (n + 1) / 2 without overflowing at i64::MAX
    let mut y = n / 2 + n % 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

/// Split `num` into `(a, b, c)` given its decimal digit count.
///
/// With `div = digits / 3` and `rem = digits - 2 * div`, `c` is the lowest
/// `div` digits, `b` the next `div` digits, and `a` is `num / 10^(div + rem)`.
pub fn split_chunks(num: i64, digits: u32) -> Chunks {
    let div = digits / 3;
    let rem = digits - 2 * div;

    let p1 = 10i64.pow(div);
    let p2 = 10i64.pow(div + rem);

    Chunks {
        a: num.wrapping_div(p2),
        b: num.wrapping_div(p1).wrapping_rem(p1),
        c: num.wrapping_rem(p1),
    }
}

/// Solve `ax² + bx + c = 0` over the integers and return the root magnitudes.
///
/// Fails with [`DegenerateQuadratic`] when `2a` is zero in wrapping
/// arithmetic (`a == 0` or `a == i64::MIN`).
pub fn quadratic_roots(chunks: Chunks) -> Result<Roots, DegenerateQuadratic> {
    let Chunks { a, b, c } = chunks;

    let two_a = a.wrapping_mul(2);
    if two_a == 0 {
        return Err(DegenerateQuadratic { a, b, c });
    }

    let discriminant = b
        .wrapping_mul(b)
        .wrapping_sub(a.wrapping_mul(4).wrapping_mul(c));
    let base = b.wrapping_neg().wrapping_div(two_a);

    let (real, imag) = if discriminant < 0 {
        (base, isqrt(discriminant.wrapping_neg()))
    } else {
        let offset = isqrt(discriminant).wrapping_div(two_a);
        let root1 = base.wrapping_add(offset);
        let root2 = base.wrapping_sub(offset);
        (root1.min(root2), root1.max(root2))
    };

    Ok(Roots {
        real: real.wrapping_abs(),
        imag: imag.wrapping_abs(),
    })
}

/// Derive the quad integer from a packed integer and its digit count.
pub fn quadratic_mix(num: i64, digits: u32) -> Result<i64, DegenerateQuadratic> {
    quadratic_roots(split_chunks(num, digits)).map(Roots::pack)
}
