use crate::errors::CipherError;
use crate::number_theory::Ring;

/// Encrypts `text` one character at a time: `c -> c^e mod n`.
///
/// The output holds one value per Unicode scalar value of `text`.
///
/// # Limitations
///
/// The cipher is only invertible for code points below `n`. Larger code
/// points wrap modulo `n` and decrypt to a different character; they are not
/// rejected, only reported through a `warn` log record.
///
/// # Errors
///
/// `InvalidModulus` when `n == 0`.
///
/// # Example
///
/// ```
/// # use classic_ciphers::rsa::encrypt;
/// assert_eq!(encrypt("A", 17, 3233).unwrap(), vec![2790]);
/// ```
pub fn encrypt(text: &str, e: u64, n: u64) -> Result<Vec<u64>, CipherError> {
    let ring = Ring::try_with(n)?;

    let ciphertext: Vec<u64> = text
        .chars()
        .map(|ch| {
            let code_point = ch as u64;
            if code_point >= n {
                log::warn!(
                    "Code point {} of {:?} is not below modulus {}, it will not decrypt back",
                    code_point,
                    ch,
                    n
                );
            }
            ring.pow(code_point, e)
        })
        .collect();

    log::trace!("Encrypted {} characters under n={}", ciphertext.len(), n);
    Ok(ciphertext)
}

/// Decrypts values produced by [`encrypt`]: `v -> v^d mod n`, read as a
/// code point.
///
/// # Errors
///
/// * `InvalidModulus` when `n == 0`.
/// * `DecodeError` when a value is not below `n`, or decrypts to something
///   that is not a Unicode scalar value.
pub fn decrypt(ciphertext: &[u64], d: u64, n: u64) -> Result<String, CipherError> {
    let ring = Ring::try_with(n)?;

    let plaintext = ciphertext
        .iter()
        .enumerate()
        .map(|(position, &value)| {
            if value >= n {
                return Err(CipherError::DecodeError(format!(
                    "Value {} at position {} is outside [0, {}]",
                    value,
                    position,
                    n - 1
                )));
            }

            let code_point = ring.pow(value, d);
            u32::try_from(code_point)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| {
                    CipherError::DecodeError(format!(
                        "Value {} at position {} decrypts to {}, which is not a character",
                        value, position, code_point
                    ))
                })
        })
        .collect::<Result<String, CipherError>>()?;

    log::trace!("Decrypted {} characters under n={}", ciphertext.len(), n);
    Ok(plaintext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keypair::KeyPair;

    #[test]
    fn test_textbook_character() -> Result<(), CipherError> {
        assert_eq!(encrypt("A", 17, 3233)?, vec![2790]);
        assert_eq!(decrypt(&[2790], 2753, 3233)?, "A");
        Ok(())
    }

    #[test]
    fn test_one_value_per_character() -> Result<(), CipherError> {
        let keys = KeyPair::from_primes(61, 53)?;
        let text = "Hi, né!";

        let ciphertext = encrypt(text, keys.e(), keys.n())?;
        assert_eq!(ciphertext.len(), text.chars().count());
        assert!(ciphertext.iter().all(|&v| v < keys.n()));

        assert_eq!(decrypt(&ciphertext, keys.d(), keys.n())?, text);
        Ok(())
    }

    #[test]
    fn test_empty_text() -> Result<(), CipherError> {
        assert!(encrypt("", 17, 3233)?.is_empty());
        assert_eq!(decrypt(&[], 2753, 3233)?, "");
        Ok(())
    }

    #[test]
    fn test_zero_modulus() {
        assert!(matches!(
            encrypt("A", 17, 0),
            Err(CipherError::InvalidModulus(_))
        ));
        assert!(matches!(
            decrypt(&[1], 17, 0),
            Err(CipherError::InvalidModulus(_))
        ));
    }

    #[test]
    fn test_code_point_above_modulus_wraps() -> Result<(), CipherError> {
        // n = 55, 'z' = 122 wraps to 122 mod 55 = 12
        let keys = KeyPair::from_primes(5, 11)?;
        let ciphertext = encrypt("z", keys.e(), keys.n())?;
        let decrypted = decrypt(&ciphertext, keys.d(), keys.n())?;

        assert_eq!(decrypted, "\u{c}");
        assert_ne!(decrypted, "z");
        Ok(())
    }

    #[test]
    fn test_value_outside_modulus() {
        assert!(matches!(
            decrypt(&[65, 3233], 2753, 3233),
            Err(CipherError::DecodeError(_))
        ));
    }

    #[test]
    fn test_result_not_a_character() {
        // 0xD800 is a surrogate; with d = 1 the value is its own plaintext
        assert!(matches!(
            decrypt(&[0xD800], 1, 0xD801),
            Err(CipherError::DecodeError(_))
        ));
    }
}
