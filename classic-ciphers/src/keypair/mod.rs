pub mod generator;
pub mod keys;

pub use generator::{generate_key_pair, generate_key_pair_with_rng};
pub use keys::{KeyPair, PrivateKey, PublicKey};
