use classic_ciphers::caesar::ShiftDirection;
use classic_ciphers::errors::CipherError;

use std::path::PathBuf;

pub const HELP: &str = "\
Commands:
  caesar encrypt <shift> <text>   shift every letter forward
  caesar decrypt <shift> <text>   shift every letter back
  rsa generate                    draw a new key pair from the prime pool
  rsa keys                        show the current key pair
  rsa encrypt <text>              encrypt with the current public key
  rsa decrypt <numbers>           decrypt space separated numbers
  rsa export <path>               save the current key pair as JSON
  rsa import <path>               load a key pair saved with export
  help                            show this message
  quit                            leave";

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Caesar {
        direction: ShiftDirection,
        shift: i64,
        text: String,
    },
    RsaGenerate,
    RsaKeys,
    RsaEncrypt(String),
    RsaDecrypt(String),
    RsaExport(PathBuf),
    RsaImport(PathBuf),
    Help,
    Quit,
    Empty,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CipherError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let mut words = line.splitn(2, ' ');
        let head = words.next().unwrap_or_default();
        let rest = words.next().unwrap_or_default();

        match head {
            "" => Ok(Command::Empty),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "caesar" => Self::parse_caesar(rest),
            "rsa" => Self::parse_rsa(rest),
            other => Err(unknown(other)),
        }
    }

    fn parse_caesar(rest: &str) -> Result<Self, CipherError> {
        let mut words = rest.splitn(3, ' ');
        let direction = match words.next().unwrap_or_default() {
            "encrypt" => ShiftDirection::Encrypt,
            "decrypt" => ShiftDirection::Decrypt,
            other => return Err(unknown(&format!("caesar {}", other))),
        };
        let shift = leading_integer(words.next().unwrap_or_default());
        let text = words.next().unwrap_or_default().to_string();

        Ok(Command::Caesar {
            direction,
            shift,
            text,
        })
    }

    fn parse_rsa(rest: &str) -> Result<Self, CipherError> {
        let mut words = rest.splitn(2, ' ');
        let action = words.next().unwrap_or_default();
        let argument = words.next().unwrap_or_default();

        match action {
            "generate" => Ok(Command::RsaGenerate),
            "keys" => Ok(Command::RsaKeys),
            "encrypt" => Ok(Command::RsaEncrypt(argument.to_string())),
            "decrypt" => Ok(Command::RsaDecrypt(argument.to_string())),
            "export" => Ok(Command::RsaExport(required_path(argument)?)),
            "import" => Ok(Command::RsaImport(required_path(argument)?)),
            other => Err(unknown(&format!("rsa {}", other))),
        }
    }
}

fn required_path(argument: &str) -> Result<PathBuf, CipherError> {
    if argument.trim().is_empty() {
        return Err(CipherError::InvalidParameters("A file path is required".to_string()));
    }

    Ok(PathBuf::from(argument.trim()))
}

/// Reads an optional sign and the digits that follow it, ignoring the rest.
///
/// `"3abc"` is 3; a word with no leading digits, or one that overflows `i64`,
/// counts as no shift at all.
fn leading_integer(word: &str) -> i64 {
    let digits_start = usize::from(word.starts_with(['+', '-']));
    let digits_end = word[digits_start..]
        .find(|ch: char| !ch.is_ascii_digit())
        .map_or(word.len(), |offset| digits_start + offset);

    word[..digits_end].parse().unwrap_or(0)
}

fn unknown(command: &str) -> CipherError {
    CipherError::InvalidParameters(format!("Unknown command `{}`, type `help`", command.trim()))
}
