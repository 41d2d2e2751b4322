#[derive(thiserror::Error, Debug)]
pub enum CipherError {
    /// Error when trying to find a modular inverse that doesn't exist (gcd(e, phi) != 1).
    #[error("InvalidInverse: {0}")]
    InvalidInverse(String),
    /// Error when a modular operation receives a zero modulus.
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    #[error("Key generation needs at least two distinct primes, pool has {0}")]
    PoolTooSmall(usize),
    #[error("SamplingExhausted: no prime distinct from {p} drawn in {attempts} attempts")]
    SamplingExhausted { p: u64, attempts: usize },
    #[error("{0} is not prime")]
    NotPrime(u64),
    #[error("DecodeError: {0}")]
    DecodeError(String),

    #[error("InvalidParameters: {0}")]
    InvalidParameters(String),

    #[error("No RSA key pair has been generated yet")]
    NoKeyPair,

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("I/O: {0}")]
    Io(#[from] std::io::Error),
}
