use crate::area::Point;

/// Greatest common divisor of the absolute values. `gcd(0, 0) == 0`.
pub fn gcd(a: i32, b: i32) -> u32 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Reduces a ratio to lowest terms with non-negative components.
///
/// A zero ratio stays zero; `(0, n)` reduces to `(0, 1)`. Returns `None` when a reduced
/// component does not fit in `i32`, which only happens for `i32::MIN` paired with an odd value.
pub fn simplify_ratio(ratio: Point) -> Option<Point> {
    let d = gcd(ratio.x, ratio.y);
    if d == 0 {
        return Some(Point::ZERO);
    }
    let reduce = |v: i32| i32::try_from(v.unsigned_abs() / d).ok();
    Some(Point::new(reduce(ratio.x)?, reduce(ratio.y)?))
}
