//! Producer schedules and block signing authorities.
//!
//! Legacy protocol revisions describe producers by a single signing key, later revisions by a
//! weighted signing authority. Both shapes survive in the canonical schema, but each pair is held
//! as a tagged union so a record names the shape it carries.

use alloy_primitives::B256;
use derive_more::From;

/// A legacy schedule entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ProducerKey {
    /// The producer account name.
    pub account_name: String,
    /// The block signing public key.
    pub block_signing_key: String,
}

/// The legacy producer schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ProducerSchedule {
    /// The schedule version.
    pub version: u32,
    /// Scheduled producers, in rotation order.
    pub producers: Vec<ProducerKey>,
}

/// A weighted key of a [`BlockSigningAuthority`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct KeyWeight {
    /// The public key.
    pub public_key: String,
    /// Its weight.
    pub weight: u32,
}

/// A weighted-threshold block signing authority.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BlockSigningAuthority {
    /// The weight required to sign.
    pub threshold: u32,
    /// The weighted keys.
    pub keys: Vec<KeyWeight>,
}

/// An authority schedule entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ProducerAuthority {
    /// The producer account name.
    pub account_name: String,
    /// The authority signing the producer's blocks.
    pub block_signing_authority: BlockSigningAuthority,
}

/// The authority-based producer schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ProducerAuthoritySchedule {
    /// The schedule version.
    pub version: u32,
    /// Scheduled producers, in rotation order.
    pub producers: Vec<ProducerAuthority>,
}

/// A producer schedule, in the shape of the revision that produced it.
#[derive(Debug, Clone, PartialEq, Eq, From)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Schedule {
    /// Legacy key schedule.
    V1(ProducerSchedule),
    /// Authority schedule.
    V2(ProducerAuthoritySchedule),
}

impl Schedule {
    /// Returns the schedule version, whatever its shape.
    pub const fn version(&self) -> u32 {
        match self {
            Self::V1(schedule) => schedule.version,
            Self::V2(schedule) => schedule.version,
        }
    }

    /// Returns the scheduled producer account names, in rotation order.
    pub fn producer_names(&self) -> Vec<&str> {
        match self {
            Self::V1(schedule) => {
                schedule.producers.iter().map(|p| p.account_name.as_str()).collect()
            }
            Self::V2(schedule) => {
                schedule.producers.iter().map(|p| p.account_name.as_str()).collect()
            }
        }
    }
}

/// How blocks of the active producer are signed.
#[derive(Debug, Clone, PartialEq, Eq, From)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum BlockSigning {
    /// A single legacy signing key.
    Key(String),
    /// A weighted signing authority.
    Authority(BlockSigningAuthority),
}

/// A proposed schedule that is not active yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PendingProducerSchedule {
    /// Block number at which the proposal became irreversible.
    pub schedule_lib_num: u32,
    /// Hash of the proposed schedule.
    pub schedule_hash: B256,
    /// The proposed schedule, if the source carried one.
    pub schedule: Option<Schedule>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_version_and_names() {
        let v1: Schedule = ProducerSchedule {
            version: 3,
            producers: vec![ProducerKey {
                account_name: "eosio".to_string(),
                block_signing_key: "EOS6MRyAj".to_string(),
            }],
        }
        .into();
        assert_eq!(v1.version(), 3);
        assert_eq!(v1.producer_names(), vec!["eosio"]);

        let v2: Schedule = ProducerAuthoritySchedule {
            version: 4,
            producers: vec![
                ProducerAuthority { account_name: "bp1".to_string(), ..Default::default() },
                ProducerAuthority { account_name: "bp2".to_string(), ..Default::default() },
            ],
        }
        .into();
        assert_eq!(v2.version(), 4);
        assert_eq!(v2.producer_names(), vec!["bp1", "bp2"]);
    }

    #[test]
    fn test_block_signing_from() {
        assert_eq!(BlockSigning::from("EOS5".to_string()), BlockSigning::Key("EOS5".to_string()));
        let authority = BlockSigningAuthority { threshold: 1, keys: vec![] };
        assert_eq!(BlockSigning::from(authority.clone()), BlockSigning::Authority(authority));
    }
}
