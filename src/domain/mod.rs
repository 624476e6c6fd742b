//! Domain modules organized as vertical slices.
//!
//! Each sub-module carries its types in `mod.rs` and, where it exposes
//! operations, a sub-client in `client.rs` borrowing the main
//! [`crate::client::TellerClient`]. Remote payloads are parsed through
//! `wire.rs` structs.

pub mod account;
pub mod balance;
pub mod rate;
pub mod session;
pub mod transaction;
