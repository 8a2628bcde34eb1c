//! Codecs for scalar, sequence, record, and network values.

pub mod cidr;
pub mod primitives;
pub mod record;
pub mod vec;
