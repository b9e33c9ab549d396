//! Reverse-chronological action history keys.
//!
//! A key is the account [`Name`] followed by `u64::MAX - sequence`, both big-endian. Keys of one
//! account share an 8-byte prefix and the newest sequence number sorts first.

use crate::{KeyError, Name};
use core::{cmp::Ordering, ops::RangeInclusive};
use reth_db_api::{
    DatabaseError,
    table::{Decode, Encode},
};
use serde::{Deserialize, Serialize};

/// Length of an encoded action key, in bytes.
pub const ACTION_KEY_LEN: usize = Name::LEN + 8;

/// Writes the key of `account`'s `sequence`-th action into the first [`ACTION_KEY_LEN`] bytes of
/// `buf`.
///
/// Bytes past [`ACTION_KEY_LEN`] are left untouched.
pub fn encode_action_key(buf: &mut [u8], account: Name, sequence: u64) -> Result<(), KeyError> {
    if buf.len() < ACTION_KEY_LEN {
        return Err(KeyError::BufferTooSmall { expected: ACTION_KEY_LEN, actual: buf.len() });
    }

    buf[..Name::LEN].copy_from_slice(&account.to_bytes());
    buf[Name::LEN..ACTION_KEY_LEN].copy_from_slice(&(u64::MAX - sequence).to_be_bytes());
    Ok(())
}

/// Reads an account and sequence number back from an encoded key.
pub fn decode_action_key(key: &[u8]) -> Result<(Name, u64), KeyError> {
    let malformed = KeyError::MalformedKey { expected: ACTION_KEY_LEN, actual: key.len() };
    let key: &[u8; ACTION_KEY_LEN] = key.try_into().map_err(|_| malformed)?;

    let (account, inverted) = key.split_at(Name::LEN);
    let account = <[u8; Name::LEN]>::try_from(account).map_err(|_| malformed)?;
    let inverted = <[u8; 8]>::try_from(inverted).map_err(|_| malformed)?;

    Ok((Name::from_bytes(account), u64::MAX - u64::from_be_bytes(inverted)))
}

/// Key of the [`crate::AccountActions`] table.
///
/// Ordering matches the encoded bytes: ascending by account, then descending by sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionKey {
    /// The account the action touched.
    pub account: Name,
    /// Per-account sequence number of the action.
    pub sequence: u64,
}

impl ActionKey {
    /// Creates a new key.
    pub const fn new(account: Name, sequence: u64) -> Self {
        Self { account, sequence }
    }

    /// The first key of `account`'s history, i.e. its most recent possible entry.
    pub const fn newest(account: Name) -> Self {
        Self::new(account, u64::MAX)
    }

    /// The last key of `account`'s history, i.e. its oldest possible entry.
    pub const fn oldest(account: Name) -> Self {
        Self::new(account, 0)
    }

    /// Key range covering all of `account`'s history, newest first.
    pub const fn range(account: Name) -> RangeInclusive<Self> {
        RangeInclusive::new(Self::newest(account), Self::oldest(account))
    }

    /// Byte prefix shared by every key of `account`.
    pub const fn prefix(account: Name) -> [u8; Name::LEN] {
        account.to_bytes()
    }

    /// Returns the encoded key.
    pub fn to_bytes(&self) -> [u8; ACTION_KEY_LEN] {
        let mut buf = [0u8; ACTION_KEY_LEN];
        // Cannot fail: the buffer is exactly one key long.
        let _ = encode_action_key(&mut buf, self.account, self.sequence);
        buf
    }

    /// Decodes a key from its byte representation.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        decode_action_key(bytes).map(|(account, sequence)| Self { account, sequence })
    }
}

impl Ord for ActionKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.account.cmp(&other.account).then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for ActionKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Encode for ActionKey {
    type Encoded = [u8; ACTION_KEY_LEN];

    fn encode(self) -> Self::Encoded {
        self.to_bytes()
    }
}

impl Decode for ActionKey {
    fn decode(value: &[u8]) -> Result<Self, DatabaseError> {
        Self::from_bytes(value).map_err(|_| DatabaseError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn name(s: &str) -> Name {
        s.parse().unwrap()
    }

    #[test]
    fn test_layout() {
        let mut buf = [0u8; ACTION_KEY_LEN];
        encode_action_key(&mut buf, name("eosio"), 1).unwrap();

        assert_eq!(&buf[..8], &6138663577826885632u64.to_be_bytes());
        assert_eq!(&buf[8..], &[0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe]);
    }

    #[test]
    fn test_newer_sorts_first() {
        let account = name("omgomgomgomg");
        let mut older = [0u8; ACTION_KEY_LEN];
        let mut newer = [0u8; ACTION_KEY_LEN];
        encode_action_key(&mut older, account, 1).unwrap();
        encode_action_key(&mut newer, account, 2).unwrap();

        assert!(older > newer);
        assert_eq!(older[..Name::LEN], newer[..Name::LEN]);
    }

    #[rstest]
    #[case::zero("alice", 0)]
    #[case::one("alice", 1)]
    #[case::max("eosio.token", u64::MAX)]
    #[case::empty_name("", 42)]
    fn test_decode_inverts_encode(#[case] account: &str, #[case] sequence: u64) {
        let account = name(account);
        let mut buf = [0u8; ACTION_KEY_LEN];
        encode_action_key(&mut buf, account, sequence).unwrap();
        assert_eq!(decode_action_key(&buf).unwrap(), (account, sequence));
    }

    #[test]
    fn test_encode_into_larger_buffer() {
        let mut buf = [0xaa; ACTION_KEY_LEN + 4];
        encode_action_key(&mut buf, name("bob"), 7).unwrap();

        assert_eq!(decode_action_key(&buf[..ACTION_KEY_LEN]).unwrap(), (name("bob"), 7));
        assert_eq!(&buf[ACTION_KEY_LEN..], &[0xaa; 4]);
    }

    #[rstest]
    #[case::empty(0)]
    #[case::prefix_only(Name::LEN)]
    #[case::one_short(ACTION_KEY_LEN - 1)]
    fn test_encode_buffer_too_small(#[case] len: usize) {
        let mut buf = vec![0u8; len];
        assert_eq!(
            encode_action_key(&mut buf, name("alice"), 1),
            Err(KeyError::BufferTooSmall { expected: ACTION_KEY_LEN, actual: len })
        );
    }

    #[rstest]
    #[case::empty(0)]
    #[case::short(ACTION_KEY_LEN - 1)]
    #[case::long(ACTION_KEY_LEN + 1)]
    fn test_decode_malformed(#[case] len: usize) {
        let buf = vec![0u8; len];
        assert_eq!(
            decode_action_key(&buf),
            Err(KeyError::MalformedKey { expected: ACTION_KEY_LEN, actual: len })
        );
        assert!(matches!(ActionKey::decode(&buf), Err(DatabaseError::Decode)));
    }

    #[test]
    fn test_range_bounds() {
        let account = name("alice");
        let range = ActionKey::range(account);

        assert_eq!(range.start().to_bytes()[8..], [0u8; 8]);
        assert_eq!(range.end().to_bytes()[8..], [0xffu8; 8]);
        assert!(range.contains(&ActionKey::new(account, 12)));
        assert!(!range.contains(&ActionKey::new(name("bob"), 12)));
        assert!(range.start().to_bytes().starts_with(&ActionKey::prefix(account)));
    }

    #[test]
    fn test_ord_matches_bytes() {
        let keys = [
            ActionKey::new(name("alice"), 1),
            ActionKey::new(name("alice"), 9),
            ActionKey::new(name("bob"), 0),
            ActionKey::new(name("bob"), u64::MAX),
        ];

        let mut by_ord = keys.to_vec();
        by_ord.sort();
        let mut by_bytes = keys.to_vec();
        by_bytes.sort_by_key(ActionKey::to_bytes);

        assert_eq!(by_ord, by_bytes);
        assert_eq!(by_ord[0], ActionKey::new(name("alice"), 9));
    }

    #[test]
    fn test_table_key_roundtrip() {
        let key = ActionKey::new(name("omgomgomgomg"), 3);
        assert_eq!(ActionKey::decode(&key.encode()).unwrap(), key);
    }

    proptest! {
        #[test]
        fn prop_sequence_order_is_reversed(account: u64, s1: u64, s2: u64) {
            prop_assume!(s1 < s2);
            let account = Name(account);

            let mut k1 = [0u8; ACTION_KEY_LEN];
            let mut k2 = [0u8; ACTION_KEY_LEN];
            encode_action_key(&mut k1, account, s1).unwrap();
            encode_action_key(&mut k2, account, s2).unwrap();

            prop_assert!(k1 > k2);
            prop_assert_eq!(&k1[..Name::LEN], &k2[..Name::LEN]);
        }

        #[test]
        fn prop_decode_inverts_encode(account: u64, sequence: u64) {
            let mut buf = [0u8; ACTION_KEY_LEN];
            encode_action_key(&mut buf, Name(account), sequence).unwrap();
            prop_assert_eq!(decode_action_key(&buf).unwrap(), (Name(account), sequence));
        }
    }
}
