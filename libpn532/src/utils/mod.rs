//! Small helpers shared across the crate: hex formatting for logs and
//! tick arithmetic for the ready-poll budgets.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
