//! # Number Theory Module
//!
//! Integer primitives behind key generation and the RSA codec: primality,
//! gcd, modular inverse and modular exponentiation.

pub mod helper;
pub mod math;
pub mod primes;

pub use helper::{extended_gcd, gcd};
pub use math::{Ring, mod_inverse, power};
pub use primes::{is_prime, primes_in_range};
