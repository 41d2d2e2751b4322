//! Trial-division primality and prime enumeration over small ranges.

use num_integer::Roots;

/// Returns `true` iff `num` is prime.
///
/// Trial-divides by every integer in `[2, floor(sqrt(num))]`; values `<= 1`
/// are never prime.
///
/// # Example
///
/// ```
/// # use classic_ciphers::number_theory::is_prime;
/// assert!(is_prime(61));
/// assert!(!is_prime(91)); // 7 * 13
/// assert!(!is_prime(1));
/// ```
pub fn is_prime(num: u64) -> bool {
    if num <= 1 {
        return false;
    }

    (2..=num.sqrt()).all(|divisor| num % divisor != 0)
}

/// Every prime in the inclusive range `[min, max]`, ascending.
///
/// Returns an empty vector when the range holds no primes or `min > max`.
pub fn primes_in_range(min: u64, max: u64) -> Vec<u64> {
    (min..=max).filter(|&candidate| is_prime(candidate)).collect()
}
