//! # Classic Ciphers
//!
//! Number theory and codecs for two textbook ciphers: a Caesar shift over the
//! Latin alphabet and a per-character RSA restricted to small primes.

pub mod caesar;
pub mod errors;
pub mod keypair;
pub mod number_theory;
pub mod preset;
pub mod rsa;

pub use caesar::{ShiftDirection, shift_text};
pub use errors::CipherError;
pub use keypair::{KeyPair, PrivateKey, PublicKey, generate_key_pair};
pub use preset::prime_pool::{DEFAULT_PRIME_POOL, PoolConfig, PrimePool};
