//! Codecs that wrap another codec and augment its behavior.

pub mod defaulted;
pub mod literal;
pub mod optional;
pub mod sized;
