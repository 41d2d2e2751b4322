use crate::commands::{Command, HELP};

use classic_ciphers::caesar::shift_text;
use classic_ciphers::errors::CipherError;
use classic_ciphers::keypair::{KeyPair, generate_key_pair};
use classic_ciphers::preset::prime_pool::PrimePool;
use classic_ciphers::rsa::{decrypt_from_wire, encrypt_to_wire};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::path::Path;

/// File layout written by `rsa export`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyPairExport {
    pub exported_at: DateTime<Utc>,
    pub key_pair: KeyPair,
}

/// What the console keeps between commands: the prime pool it draws from and
/// the key pair currently on display.
pub struct State {
    pool: PrimePool,
    key_pair: Option<KeyPair>,
}

impl State {
    pub fn new(pool: PrimePool) -> Self {
        Self {
            pool,
            key_pair: None,
        }
    }

    /// Runs one command and returns the text to print.
    ///
    /// A failing command leaves the current key pair untouched.
    pub fn execute(&mut self, command: Command) -> Result<String, CipherError> {
        match command {
            Command::Caesar {
                direction,
                shift,
                text,
            } => Ok(shift_text(&text, shift, direction)),
            Command::RsaGenerate => {
                let key_pair = generate_key_pair(self.pool.primes())?;
                self.key_pair = Some(key_pair);
                Ok(describe(&key_pair))
            }
            Command::RsaKeys => Ok(describe(self.current()?)),
            Command::RsaEncrypt(text) => {
                if text.trim().is_empty() {
                    return Err(CipherError::InvalidParameters("Nothing to encrypt".to_string()));
                }
                encrypt_to_wire(&text, &self.current()?.public_key())
            }
            Command::RsaDecrypt(ciphertext) => {
                decrypt_from_wire(ciphertext.trim(), &self.current()?.private_key())
            }
            Command::RsaExport(path) => self.export(&path),
            Command::RsaImport(path) => self.import(&path),
            Command::Help => Ok(HELP.to_string()),
            Command::Quit | Command::Empty => Ok(String::new()),
        }
    }

    fn current(&self) -> Result<&KeyPair, CipherError> {
        self.key_pair.as_ref().ok_or(CipherError::NoKeyPair)
    }

    fn export(&self, path: &Path) -> Result<String, CipherError> {
        let export = KeyPairExport {
            exported_at: Utc::now(),
            key_pair: *self.current()?,
        };
        std::fs::write(path, serde_json::to_string_pretty(&export)?)?;
        log::debug!("Exported key pair to {}", path.display());

        Ok(format!("Key pair written to {}", path.display()))
    }

    fn import(&mut self, path: &Path) -> Result<String, CipherError> {
        let data = std::fs::read_to_string(path)?;
        let export: KeyPairExport = serde_json::from_str(&data)?;
        self.key_pair = Some(export.key_pair);
        log::debug!(
            "Imported key pair exported at {} from {}",
            export.exported_at,
            path.display()
        );

        Ok(describe(&export.key_pair))
    }
}

fn describe(key_pair: &KeyPair) -> String {
    format!(
        "p = {}, q = {}\npublic key  (e, n) = ({}, {})\nprivate key (d, n) = ({}, {})",
        key_pair.p(),
        key_pair.q(),
        key_pair.e(),
        key_pair.n(),
        key_pair.d(),
        key_pair.n()
    )
}
