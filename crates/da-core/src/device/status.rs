//! Well-known admission states.
//!
//! `Device::status` stays a free-form string; these are the values the
//! admission workflow writes.

pub const PENDING: &str = "pending";
pub const ACCEPTED: &str = "accepted";
pub const REJECTED: &str = "rejected";
