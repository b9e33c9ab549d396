//! Packed 64-bit account names.

use core::{fmt, str::FromStr};
use derive_more::{From, Into};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Symbols of the account name alphabet, indexed by their 5-bit value.
const CHARMAP: &[u8; 32] = b".12345abcdefghijklmnopqrstuvwxyz";

/// An account name packed into a `u64`.
///
/// Names are up to 12 characters from `.12345a-z` at 5 bits each, followed by an optional 13th
/// character from `.12345a-j` stored in the low 4 bits. The first character occupies the most
/// significant bits, so big-endian bytes sort like the names themselves.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    From,
    Into,
    Serialize,
    Deserialize,
)]
pub struct Name(pub u64);

impl Name {
    /// Width of a packed name, in bytes.
    pub const LEN: usize = 8;

    /// Maximum length of a name, in characters.
    pub const MAX_CHARS: usize = 13;

    /// Returns the raw packed value.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Returns the big-endian byte representation.
    pub const fn to_bytes(&self) -> [u8; Self::LEN] {
        self.0.to_be_bytes()
    }

    /// Builds a name from its big-endian byte representation.
    pub const fn from_bytes(bytes: [u8; Self::LEN]) -> Self {
        Self(u64::from_be_bytes(bytes))
    }
}

/// Errors returned when parsing a [`Name`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// The name has more than [`Name::MAX_CHARS`] characters.
    #[error("name is longer than 13 characters: {0}")]
    TooLong(String),
    /// The name contains a character outside the alphabet, or a 13th character outside `.1-5a-j`.
    #[error("invalid character {character:?} at position {position} in name")]
    InvalidChar {
        /// The offending character.
        character: char,
        /// Its position in the name.
        position: usize,
    },
}

const fn symbol(c: u8) -> Option<u64> {
    match c {
        b'a'..=b'z' => Some((c - b'a') as u64 + 6),
        b'1'..=b'5' => Some((c - b'1') as u64 + 1),
        b'.' => Some(0),
        _ => None,
    }
}

impl FromStr for Name {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() > Self::MAX_CHARS {
            return Err(NameError::TooLong(s.to_string()));
        }

        let mut value = 0u64;
        for (position, character) in s.chars().enumerate() {
            let invalid = NameError::InvalidChar { character, position };
            let sym = u8::try_from(character).ok().and_then(symbol).ok_or(invalid.clone())?;

            if position < 12 {
                value |= sym << (64 - 5 * (position + 1));
            } else if sym <= 0x0f {
                value |= sym;
            } else {
                return Err(invalid);
            }
        }

        Ok(Self(value))
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = [b'.'; Self::MAX_CHARS];
        let mut tmp = self.0;
        for i in 0..Self::MAX_CHARS {
            let (mask, shift) = if i == 0 { (0x0f, 4) } else { (0x1f, 5) };
            out[Self::MAX_CHARS - 1 - i] = CHARMAP[(tmp & mask) as usize];
            tmp >>= shift;
        }

        let len = out.iter().rposition(|&c| c != b'.').map_or(0, |last| last + 1);
        // Every byte comes from CHARMAP, which is ASCII.
        out[..len].iter().try_for_each(|&c| fmt::Write::write_char(f, c as char))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::eosio("eosio", 6138663577826885632)]
    #[case::token("eosio.token", 6138663591592764928)]
    #[case::empty("", 0)]
    fn test_known_values(#[case] name: &str, #[case] value: u64) {
        assert_eq!(name.parse::<Name>().unwrap(), Name(value));
        assert_eq!(Name(value).to_string(), name);
    }

    #[rstest]
    #[case::twelve("omgomgomgomg")]
    #[case::digits("a12345")]
    #[case::thirteen("zzzzzzzzzzzzj")]
    #[case::inner_dots("a.b.c")]
    fn test_roundtrip(#[case] name: &str) {
        let parsed: Name = name.parse().unwrap();
        assert_eq!(parsed.to_string(), name);
        assert_eq!(Name::from_bytes(parsed.to_bytes()), parsed);
    }

    #[test]
    fn test_trailing_dots_trimmed() {
        let name: Name = "abc...".parse().unwrap();
        assert_eq!(name, "abc".parse().unwrap());
        assert_eq!(name.to_string(), "abc");
    }

    #[rstest]
    #[case::uppercase("Eosio", 'E', 0)]
    #[case::six("eos6", '6', 3)]
    #[case::unicode("éos", 'é', 0)]
    #[case::thirteenth_out_of_range("aaaaaaaaaaaaz", 'z', 12)]
    fn test_invalid_chars(#[case] name: &str, #[case] character: char, #[case] position: usize) {
        assert_eq!(name.parse::<Name>(), Err(NameError::InvalidChar { character, position }));
    }

    #[test]
    fn test_too_long() {
        assert!(matches!("aaaaaaaaaaaaaa".parse::<Name>(), Err(NameError::TooLong(_))));
    }

    #[test]
    fn test_bytes_order_follows_names() {
        let a: Name = "alice".parse().unwrap();
        let b: Name = "bob".parse().unwrap();
        assert!(a < b);
        assert!(a.to_bytes() < b.to_bytes());
    }
}
