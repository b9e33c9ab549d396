#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod native;

pub mod types;
pub use types::{BLOCK_VERSION, Block};

pub mod convert;

mod config;
pub use config::HydratorConfig;

mod decoder;
pub use decoder::NativeDecoder;

mod errors;
pub use errors::{BoxedDecoderError, DecodeError};

mod hydrator;
pub use hydrator::{Hydrator, normalize};

#[cfg(test)]
mod test_utils;
