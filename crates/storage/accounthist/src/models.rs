//! Database table schemas for account history.
//!
//! The tables are registered using [`reth_db_api::table::TableInfo`] and grouped into a
//! [`reth_db_api::TableSet`] for database initialization via reth's storage api.

use crate::ActionKey;
use alloy_primitives::B256;
use reth_codecs::Compact;
use reth_db_api::table::Table;
use serde::{Deserialize, Serialize};

/// Location of an action on chain. Stored as value in the [`AccountActions`] table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActionRef {
    /// Number of the block containing the action.
    pub block_num: u64,
    /// Id of the transaction containing the action.
    pub trx_id: B256,
    /// Execution index of the action within its transaction.
    pub action_index: u32,
}

impl ActionRef {
    /// Encoded width, in bytes.
    pub const LEN: usize = 8 + 32 + 4;
}

// Fixed width, so every field sorts and slices at a known offset.
impl Compact for ActionRef {
    fn to_compact<B: bytes::BufMut + AsMut<[u8]>>(&self, buf: &mut B) -> usize {
        buf.put_u64(self.block_num);
        buf.put_slice(self.trx_id.as_slice());
        buf.put_u32(self.action_index);
        Self::LEN
    }

    fn from_compact(mut buf: &[u8], _len: usize) -> (Self, &[u8]) {
        use bytes::Buf;

        let block_num = buf.get_u64();
        let trx_id = B256::from_slice(&buf[..32]);
        buf.advance(32);
        let action_index = buf.get_u32();
        (Self { block_num, trx_id, action_index }, buf)
    }
}

/// Per-account action history.
///
/// Walking [`ActionKey::range`] of an account yields its actions newest first.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountActions;

impl Table for AccountActions {
    const NAME: &'static str = "account_actions";
    const DUPSORT: bool = false;

    type Key = ActionKey;
    type Value = ActionRef;
}

/// Implements [`reth_db_api::table::Compress`] and [`reth_db_api::table::Decompress`] for types
/// that implement [`reth_codecs::Compact`].
macro_rules! impl_compression_for_compact {
    ($($name:ident),+ $(,)?) => {
        $(
            impl reth_db_api::table::Compress for $name {
                type Compressed = Vec<u8>;

                fn compress_to_buf<B: bytes::BufMut + AsMut<[u8]>>(&self, buf: &mut B) {
                    let _ = Compact::to_compact(self, buf);
                }
            }

            impl reth_db_api::table::Decompress for $name {
                fn decompress(value: &[u8]) -> Result<Self, reth_db_api::DatabaseError> {
                    if value.len() < Self::LEN {
                        return Err(reth_db_api::DatabaseError::Decode);
                    }
                    let (obj, _) = Compact::from_compact(value, value.len());
                    Ok(obj)
                }
            }
        )+
    };
}

/// Implements [`reth_db_api::table::TableInfo`] for one or more [`Table`] types.
macro_rules! impl_table_info {
    ($($table:ty),+ $(,)?) => {
        $(
            impl reth_db_api::table::TableInfo for $table {
                fn name(&self) -> &'static str {
                    <$table as Table>::NAME
                }

                fn is_dupsort(&self) -> bool {
                    <$table as Table>::DUPSORT
                }
            }
        )+
    };
}

/// Declares a struct naming a collection of tables and implements [`reth_db_api::TableSet`] for
/// it, so it can be passed to `init_db_for::<_, Set>()`.
macro_rules! impl_table_set {
    (
        $(#[$outer:meta])*
        $set_name:ident, $($table:ty),+ $(,)?
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Copy)]
        pub struct $set_name;

        impl reth_db_api::TableSet for $set_name {
            fn tables() -> Box<dyn Iterator<Item = Box<dyn reth_db_api::table::TableInfo>>> {
                Box::new(vec![
                    $(
                        Box::new(<$table>::default()) as Box<dyn reth_db_api::table::TableInfo>
                    ),*
                ].into_iter())
            }
        }
    };
}

impl_compression_for_compact!(ActionRef);

impl_table_info!(AccountActions);

impl_table_set!(
    /// All tables of the account history store.
    AccountHistoryTables,
    AccountActions
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Name;
    use reth_db::{
        DatabaseEnv,
        mdbx::{DatabaseArguments, init_db_for},
    };
    use reth_db_api::{
        Database,
        cursor::DbCursorRO,
        table::{Compress, Decompress},
        transaction::{DbTx, DbTxMut},
    };
    use tempfile::TempDir;

    fn action_ref(block_num: u64, action_index: u32) -> ActionRef {
        ActionRef { block_num, trx_id: B256::repeat_byte(block_num as u8), action_index }
    }

    fn setup_db() -> (TempDir, DatabaseEnv) {
        let temp_dir = TempDir::new().expect("Could not create temp dir");
        let db = init_db_for::<_, AccountHistoryTables>(temp_dir.path(), DatabaseArguments::default())
            .expect("Failed to init database");
        (temp_dir, db)
    }

    #[test]
    fn test_action_ref_compact_roundtrip() {
        let original = action_ref(1234, 7);

        let mut buffer = Vec::new();
        let bytes_written = original.to_compact(&mut buffer);
        assert_eq!(bytes_written, ActionRef::LEN);
        assert_eq!(buffer.len(), ActionRef::LEN);

        let (decoded, remaining) = ActionRef::from_compact(&buffer, bytes_written);
        assert_eq!(decoded, original);
        assert!(remaining.is_empty());
    }

    #[test]
    fn test_action_ref_decompress_rejects_short_value() {
        let compressed = action_ref(5, 0).compress();
        assert!(ActionRef::decompress(&compressed[..ActionRef::LEN - 1]).is_err());
        assert_eq!(ActionRef::decompress(&compressed).unwrap(), action_ref(5, 0));
    }

    #[test]
    fn test_history_walks_newest_first() {
        let (_dir, db) = setup_db();
        let alice: Name = "alice".parse().unwrap();
        let bob: Name = "bob".parse().unwrap();

        let tx = db.tx_mut().expect("Failed to create write transaction");
        for sequence in 1..=3u64 {
            tx.put::<AccountActions>(ActionKey::new(alice, sequence), action_ref(sequence, 0))
                .expect("Failed to insert action");
        }
        tx.put::<AccountActions>(ActionKey::new(bob, 1), action_ref(99, 1))
            .expect("Failed to insert action");
        tx.commit().expect("Failed to commit");

        let tx = db.tx().expect("Failed to create read transaction");
        let mut cursor = tx.cursor_read::<AccountActions>().expect("Failed to open cursor");
        let history = cursor
            .walk_range(ActionKey::range(alice))
            .expect("Failed to walk range")
            .collect::<Result<Vec<_>, _>>()
            .expect("Failed to read rows");

        let sequences: Vec<u64> = history.iter().map(|(key, _)| key.sequence).collect();
        assert_eq!(sequences, vec![3, 2, 1]);
        assert_eq!(history[0].1, action_ref(3, 0));
    }

    #[test]
    fn test_newest_seek_lands_on_latest_entry() {
        let (_dir, db) = setup_db();
        let alice: Name = "alice".parse().unwrap();

        let tx = db.tx_mut().expect("Failed to create write transaction");
        tx.put::<AccountActions>(ActionKey::new(alice, 10), action_ref(10, 0)).unwrap();
        tx.put::<AccountActions>(ActionKey::new(alice, 11), action_ref(11, 2)).unwrap();
        tx.commit().unwrap();

        let tx = db.tx().unwrap();
        let mut cursor = tx.cursor_read::<AccountActions>().unwrap();
        let (key, value) = cursor.seek(ActionKey::newest(alice)).unwrap().unwrap();

        assert_eq!(key, ActionKey::new(alice, 11));
        assert_eq!(value.action_index, 2);
    }
}
