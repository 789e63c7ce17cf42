//! Implementations of ports (hexagonal adapters).

pub mod http;
pub mod source;
pub mod table;
