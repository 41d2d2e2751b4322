use crate::errors::CipherError;
use crate::number_theory::{gcd, is_prime, mod_inverse};
use crate::rsa;

use serde::{Deserialize, Serialize};

/// A textbook RSA key pair over two small primes.
///
/// Every field is fixed at construction. Deserialized pairs are checked with
/// [`KeyPair::validate`] before they are handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "KeyPairParts")]
pub struct KeyPair {
    p: u64,
    q: u64,
    n: u64,
    phi: u64,
    e: u64,
    d: u64,
}

/// Unchecked fields of a [`KeyPair`] as they appear on the wire.
#[derive(Debug, Clone, Copy, Deserialize)]
struct KeyPairParts {
    p: u64,
    q: u64,
    n: u64,
    phi: u64,
    e: u64,
    d: u64,
}

impl TryFrom<KeyPairParts> for KeyPair {
    type Error = CipherError;

    fn try_from(parts: KeyPairParts) -> Result<Self, Self::Error> {
        let key_pair = KeyPair {
            p: parts.p,
            q: parts.q,
            n: parts.n,
            phi: parts.phi,
            e: parts.e,
            d: parts.d,
        };
        key_pair.validate()?;

        Ok(key_pair)
    }
}

/// The `(e, n)` half of a key pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    pub e: u64,
    pub n: u64,
}

/// The `(d, n)` half of a key pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateKey {
    pub d: u64,
    pub n: u64,
}

impl KeyPair {
    /// Derives the key pair for two distinct primes.
    ///
    /// `n = p * q`, `phi = (p - 1)(q - 1)`, `e` is the smallest odd integer
    /// `>= 3` coprime with `phi` and `d = e^-1 mod phi`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_ciphers::KeyPair;
    /// let keys = KeyPair::from_primes(61, 53).unwrap();
    /// assert_eq!((keys.n(), keys.phi(), keys.e(), keys.d()), (3233, 3120, 7, 1783));
    /// ```
    pub fn from_primes(p: u64, q: u64) -> Result<Self, CipherError> {
        if p == q {
            return Err(CipherError::InvalidParameters(format!(
                "Primes must be distinct, got p = q = {}",
                p
            )));
        }
        for factor in [p, q] {
            if !is_prime(factor) {
                return Err(CipherError::NotPrime(factor));
            }
        }

        let n = p.checked_mul(q).ok_or_else(|| {
            CipherError::InvalidParameters(format!("Modulus {} * {} overflows u64", p, q))
        })?;
        let phi = (p - 1) * (q - 1);

        let e = smallest_public_exponent(phi)?;
        let d = mod_inverse(e, phi)?;

        Ok(Self { p, q, n, phi, e, d })
    }

    /// Checks every key pair invariant, including that `e` is the exponent
    /// [`KeyPair::from_primes`] would pick and `d` lies in `[0, phi - 1]`.
    ///
    /// # Errors
    ///
    /// `NotPrime` for a composite factor, `InvalidParameters` for any other
    /// broken relation between the fields.
    pub fn validate(&self) -> Result<(), CipherError> {
        let invalid = |reason: String| -> Result<(), CipherError> {
            Err(CipherError::InvalidParameters(reason))
        };

        if self.p == self.q {
            return invalid(format!("p and q must differ, both are {}", self.p));
        }
        for factor in [self.p, self.q] {
            if !is_prime(factor) {
                return Err(CipherError::NotPrime(factor));
            }
        }
        if self.p.checked_mul(self.q) != Some(self.n) {
            return invalid(format!("n = {} is not {} * {}", self.n, self.p, self.q));
        }
        if (self.p - 1) * (self.q - 1) != self.phi {
            return invalid(format!("phi = {} is not (p - 1)(q - 1)", self.phi));
        }
        if self.e < 3 || self.e % 2 == 0 {
            return invalid(format!("e = {} is not an odd integer >= 3", self.e));
        }
        if gcd(self.e, self.phi) != 1 {
            return invalid(format!("e = {} is not coprime with phi = {}", self.e, self.phi));
        }
        let expected_e = smallest_public_exponent(self.phi)?;
        if self.e != expected_e {
            return invalid(format!(
                "e = {} is not the smallest odd exponent coprime with phi, expected {}",
                self.e, expected_e
            ));
        }
        if self.d >= self.phi {
            return invalid(format!("d = {} is outside [0, {}]", self.d, self.phi - 1));
        }
        if (self.e as u128 * self.d as u128) % self.phi as u128 != 1 {
            return invalid(format!(
                "d = {} is not the inverse of e = {} mod {}",
                self.d, self.e, self.phi
            ));
        }

        Ok(())
    }

    pub fn p(&self) -> u64 {
        self.p
    }

    pub fn q(&self) -> u64 {
        self.q
    }

    pub fn n(&self) -> u64 {
        self.n
    }

    pub fn phi(&self) -> u64 {
        self.phi
    }

    pub fn e(&self) -> u64 {
        self.e
    }

    pub fn d(&self) -> u64 {
        self.d
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            e: self.e,
            n: self.n,
        }
    }

    pub fn private_key(&self) -> PrivateKey {
        PrivateKey {
            d: self.d,
            n: self.n,
        }
    }

    pub fn to_json(&self) -> Result<String, CipherError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses and validates a key pair written by [`KeyPair::to_json`].
    pub fn from_json(data: &str) -> Result<Self, CipherError> {
        Ok(serde_json::from_str(data)?)
    }
}

impl PublicKey {
    /// Encrypts every character of `text` under this key.
    pub fn encrypt(&self, text: &str) -> Result<Vec<u64>, CipherError> {
        rsa::encrypt(text, self.e, self.n)
    }
}

impl PrivateKey {
    /// Decrypts a ciphertext produced under the matching public key.
    pub fn decrypt(&self, ciphertext: &[u64]) -> Result<String, CipherError> {
        rsa::decrypt(ciphertext, self.d, self.n)
    }
}

/// Smallest odd `e >= 3` with `gcd(e, phi) == 1`.
///
/// `phi` is even for two distinct primes, so `phi - 1` bounds the search.
fn smallest_public_exponent(phi: u64) -> Result<u64, CipherError> {
    (3..=phi.saturating_add(3))
        .step_by(2)
        .find(|&e| gcd(e, phi) == 1)
        .ok_or_else(|| {
            CipherError::InvalidParameters(format!("No odd exponent is coprime with {}", phi))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textbook_key_pair() -> Result<(), CipherError> {
        let keys = KeyPair::from_primes(61, 53)?;

        assert_eq!(keys.p(), 61);
        assert_eq!(keys.q(), 53);
        assert_eq!(keys.n(), 3233);
        assert_eq!(keys.phi(), 3120);
        // 3120 = 2^4 * 3 * 5 * 13, so 7 is the first odd exponent coprime with it
        assert_eq!(keys.e(), 7);
        assert_eq!(keys.d(), 1783);
        assert_eq!(keys.public_key(), PublicKey { e: 7, n: 3233 });
        assert_eq!(keys.private_key(), PrivateKey { d: 1783, n: 3233 });
        Ok(())
    }

    #[test]
    fn test_exponent_skips_common_factors() -> Result<(), CipherError> {
        // phi = 60 * 72 = 4320 = 2^5 * 3^3 * 5, so 3 and 5 are skipped
        let keys = KeyPair::from_primes(61, 73)?;
        assert_eq!(keys.phi(), 4320);
        assert_eq!(keys.e(), 7);
        assert_eq!((keys.e() * keys.d()) % keys.phi(), 1);
        Ok(())
    }

    #[test]
    fn test_smallest_primes() -> Result<(), CipherError> {
        let keys = KeyPair::from_primes(2, 3)?;
        assert_eq!((keys.n(), keys.phi(), keys.e(), keys.d()), (6, 2, 3, 1));
        keys.validate()
    }

    #[test]
    fn test_rejects_bad_factors() {
        assert!(matches!(
            KeyPair::from_primes(61, 61),
            Err(CipherError::InvalidParameters(_))
        ));
        assert!(matches!(
            KeyPair::from_primes(61, 91),
            Err(CipherError::NotPrime(91))
        ));
        assert!(matches!(
            KeyPair::from_primes(1, 53),
            Err(CipherError::NotPrime(1))
        ));
        assert!(matches!(
            KeyPair::from_primes(4_294_967_311, 4_294_967_357),
            Err(CipherError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_json_round_trip() -> Result<(), CipherError> {
        let keys = KeyPair::from_primes(61, 53)?;
        let restored = KeyPair::from_json(&keys.to_json()?)?;
        assert_eq!(keys, restored);
        Ok(())
    }

    #[test]
    fn test_json_import_is_validated() {
        let tampered = r#"{ "p": 61, "q": 53, "n": 3233, "phi": 3120, "e": 7, "d": 1784 }"#;
        assert!(matches!(
            KeyPair::from_json(tampered),
            Err(CipherError::SerializationError(_))
        ));

        let composite = r#"{ "p": 91, "q": 53, "n": 4823, "phi": 4680, "e": 7, "d": 2743 }"#;
        assert!(KeyPair::from_json(composite).is_err());
    }

    #[test]
    fn test_validate_catches_each_relation() {
        let good = KeyPair::from_primes(61, 53).unwrap();
        assert!(good.validate().is_ok());

        let wrong_n = KeyPair { n: 3234, ..good };
        let wrong_phi = KeyPair { phi: 3121, ..good };
        let wrong_e = KeyPair { e: 15, ..good };
        let same_primes = KeyPair { q: 61, ..good };
        let identity = KeyPair { e: 1, d: 1, ..good };
        let even_e = KeyPair { e: 2, ..good };
        // 17 * 2753 = 1 mod 3120, but 17 is not the smallest usable exponent
        let larger_e = KeyPair { e: 17, d: 2753, ..good };
        let d_not_reduced = KeyPair { d: 1783 + 3120, ..good };

        for broken in [
            wrong_n,
            wrong_phi,
            wrong_e,
            same_primes,
            identity,
            even_e,
            larger_e,
            d_not_reduced,
        ] {
            assert!(broken.validate().is_err(), "{:?} should be rejected", broken);
        }
    }

    #[test]
    fn test_json_import_rejects_weak_exponents() {
        for (e, d) in [(1, 1), (17, 2753), (17, 5873), (7, 1783 + 3120)] {
            let json = format!(
                r#"{{ "p": 61, "q": 53, "n": 3233, "phi": 3120, "e": {}, "d": {} }}"#,
                e, d
            );
            assert!(
                matches!(KeyPair::from_json(&json), Err(CipherError::SerializationError(_))),
                "e = {}, d = {} should be rejected",
                e,
                d
            );
        }
    }

    #[test]
    fn test_key_halves_round_trip() -> Result<(), CipherError> {
        let keys = KeyPair::from_primes(61, 53)?;
        let ciphertext = keys.public_key().encrypt("RSA")?;
        assert_eq!(keys.private_key().decrypt(&ciphertext)?, "RSA");
        Ok(())
    }
}
