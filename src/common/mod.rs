//! Shared constants used by the configuration core and the shells

pub mod constants;
