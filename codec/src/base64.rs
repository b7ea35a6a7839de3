//! Base64 over the URL-safe alphabet `A-Za-z0-9-~` with `=` padding.

use base64::alphabet::Alphabet;
use base64::engine::general_purpose::{GeneralPurpose, PAD};
use base64::engine::Engine;
use base64::DecodeError;

const ALPHABET: Alphabet =
    match Alphabet::new("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-~") {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("malformed base64 alphabet"),
    };

const ENGINE: GeneralPurpose = GeneralPurpose::new(&ALPHABET, PAD);

/// A decode failure, carrying the offending symbol when there is one.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// A byte outside the alphabet, and its position.
    InvalidSymbol { offset: usize, symbol: u8 },
    /// The input length is not a padded quartet multiple.
    InvalidLength,
    /// Trailing bits or misplaced padding.
    InvalidPadding,
}

pub fn encode(bytes: &[u8]) -> String {
    ENGINE.encode(bytes)
}

pub fn decode(string: &str) -> Result<Vec<u8>, Error> {
    ENGINE.decode(string).map_err(|e| match e {
        DecodeError::InvalidByte(offset, symbol) => Error::InvalidSymbol { offset, symbol },
        DecodeError::InvalidLength(_) | DecodeError::InvalidLastSymbol(_, _) => {
            Error::InvalidLength
        }
        DecodeError::InvalidPadding => Error::InvalidPadding,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips() {
        let cases: [&[u8]; 5] = [b"", b"f", b"fo", b"foo", b"\xff\xfe\xfd\x00\x01"];
        for bytes in cases {
            let encoded = encode(bytes);
            assert_eq!(decode(&encoded).as_deref(), Ok(bytes));
        }
    }

    #[test]
    fn alphabet_is_url_safe() {
        assert_eq!(encode(b"\xff\xff\xff"), "~~~~");
        assert_eq!(encode(b"\xfb\xef\xbe"), "----");
        assert_eq!(encode(b"\xfa\xef\xbe"), "-u--");
        assert_eq!(encode(b"f"), "Zg==");
    }

    #[test]
    fn rejects_foreign_symbols() {
        assert_eq!(
            decode("Zg=?"),
            Err(Error::InvalidSymbol {
                offset: 3,
                symbol: b'?'
            })
        );
        // The standard alphabet's `/` is not in this one.
        assert!(matches!(
            decode("ab/d"),
            Err(Error::InvalidSymbol { symbol: b'/', .. })
        ));
    }

    #[test]
    fn rejects_incomplete_quartets() {
        assert!(decode("Zgo").is_err());
    }
}
