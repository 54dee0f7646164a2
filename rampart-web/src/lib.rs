//! The reporting boundary for rampart: argument parsing, the live dashboard
//! server, and opening a browser at it. Everything here only _reads_ ramp
//! snapshots; the engine in the `rampart` crate never depends on this side.

pub mod browser;
pub mod cli;
pub mod server;
