/// Computes the greatest common divisor of two numbers.
///
/// `gcd(a, 0) == a`; when `a < b` the first step swaps them.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a
}

/// Finds (g, x, y) such that ax + by = g = gcd(a, b).
///
/// Works over `i128` so any pair of `u64` values fits without overflow.
pub fn extended_gcd(a: i128, b: i128) -> (i128, i128, i128) {
    if a == 0 {
        if b.is_negative() {
            return (-b, 0, -1);
        }

        return (b, 0, 1);
    }

    let (g, x1, y1) = extended_gcd(b % a, a);
    let x = y1 - (b / a) * x1;
    let y = x1;
    (g, x, y)
}
