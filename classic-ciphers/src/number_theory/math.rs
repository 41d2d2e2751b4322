//! Modular arithmetic over Z_n used by key generation and the RSA codec.

use crate::errors::CipherError;

use super::extended_gcd;

/// Represents the residue ring Z_n for a non-zero modulus.
///
/// Products are widened to `u128` before reduction, so any `u64` modulus is
/// safe from overflow during squaring.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Ring {
    modulus: u64,
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be non-zero. A modulus of 1 is accepted and maps
    /// everything to 0.
    pub fn try_with(modulus: u64) -> Result<Self, CipherError> {
        if modulus == 0 {
            return Err(CipherError::InvalidModulus(
                "Modulus must be greater than 0".to_string(),
            ));
        }

        Ok(Ring { modulus })
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_ciphers::number_theory::Ring;
    /// let ring = Ring::try_with(3233).unwrap();
    /// assert_eq!(ring.modulus(), 3233);
    /// ```
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Reduces a value into `[0, modulus - 1]`.
    pub fn normalize(&self, value: u64) -> u64 {
        value % self.modulus
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_ciphers::number_theory::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.mul(7, 5), 5);
    /// assert_eq!(ring.mul(u64::MAX, u64::MAX), 5);
    /// ```
    pub fn mul(&self, a: u64, b: u64) -> u64 {
        let m = self.modulus as u128;
        ((a as u128 % m) * (b as u128 % m) % m) as u64
    }

    /// Computes `base^exp mod modulus` by repeated squaring.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_ciphers::number_theory::Ring;
    /// let ring = Ring::try_with(3233).unwrap();
    /// assert_eq!(ring.pow(65, 17), 2790);
    /// assert_eq!(ring.pow(2790, 2753), 65);
    /// ```
    pub fn pow(&self, base: u64, exp: u64) -> u64 {
        let mut result = self.normalize(1);
        let mut base = self.normalize(base);
        let mut exp = exp;

        while exp > 0 {
            if exp & 1 == 1 {
                result = self.mul(result, base);
            }
            exp >>= 1;
            base = self.mul(base, base);
        }

        result
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// The inverse exists if and only if `gcd(a, modulus) == 1`.
    /// Uses the Extended Euclidean Algorithm.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidInverse` if `gcd(a, modulus) != 1`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_ciphers::number_theory::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.inv(3).unwrap(), 7); // 3 * 7 = 21 = 1 mod 10
    /// assert_eq!(ring.inv(9).unwrap(), 9);
    /// assert!(ring.inv(2).is_err()); // gcd(2, 10) = 2
    /// assert!(ring.inv(0).is_err());
    /// ```
    pub fn inv(&self, a: u64) -> Result<u64, CipherError> {
        let m = self.modulus as i128;

        let (g, x, _) = extended_gcd(a as i128, m);
        if g != 1 {
            return Err(CipherError::InvalidInverse(format!(
                "Modular inverse does not exist for {} mod {} (gcd={})",
                a, self.modulus, g
            )));
        }

        Ok(x.rem_euclid(m) as u64)
    }
}

/// Modular exponentiation `base^exp mod modulus`.
///
/// # Errors
///
/// Returns `CipherError::InvalidModulus` when `modulus == 0`.
pub fn power(base: u64, exp: u64, modulus: u64) -> Result<u64, CipherError> {
    Ok(Ring::try_with(modulus)?.pow(base, exp))
}

/// Modular inverse of `e` mod `phi`, normalized into `[0, phi - 1]`.
///
/// # Errors
///
/// Returns `CipherError::InvalidInverse` when `gcd(e, phi) != 1` and
/// `CipherError::InvalidModulus` when `phi == 0`.
pub fn mod_inverse(e: u64, phi: u64) -> Result<u64, CipherError> {
    Ring::try_with(phi)?.inv(e)
}
