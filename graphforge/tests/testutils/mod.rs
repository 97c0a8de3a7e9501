//! Test utilities for GraphForge integration tests
//!
//! Two pieces are shared across the suites:
//! - MockConnection: a scripted [`graphforge::GraphConnection`] that replays
//!   canned server responses and records every submitted statement
//! - snapshots: canned schema description payloads in the server's JSON shape
//!
//! Neither touches the network, so every test runs hermetically.

// Each test binary compiles this module separately and uses its own subset
// of the helpers.
#![allow(dead_code)]

pub mod mock_connection;
pub mod snapshots;
