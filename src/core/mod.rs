//! Core conversion building blocks: the canonical symbol table, the greedy
//! decoder and encoder, and the parameters that drive a savings scan. These
//! are the primitives consumed by the high-level `api` module.
pub mod decode;
pub mod encode;
pub mod params;
pub mod symbols;

pub use decode::decode;
pub use encode::{MAX_VALUE, encode};
