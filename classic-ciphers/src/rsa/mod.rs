//! # RSA Codec Module
//!
//! Per-character textbook RSA and the space-separated decimal form its
//! ciphertext travels in.

pub mod codec;
pub mod wire;

pub use codec::{decrypt, encrypt};
pub use wire::{decrypt_from_wire, encode_ciphertext, encrypt_to_wire, parse_ciphertext};
