//! Account domain — provider detection and the connection state machine.

pub mod client;

pub use client::Accounts;
