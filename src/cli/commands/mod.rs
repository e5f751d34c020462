//! CLI command implementations

pub mod inspect;
pub mod recommend;
pub mod train;
