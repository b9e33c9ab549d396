#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod errors;
pub use errors::KeyError;

mod name;
pub use name::{Name, NameError};

mod key;
pub use key::{ACTION_KEY_LEN, ActionKey, decode_action_key, encode_action_key};

mod models;
pub use models::{AccountActions, AccountHistoryTables, ActionRef};
