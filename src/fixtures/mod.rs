//! Deterministic stand-in data for the dashboard views, used until a real
//! backend is configured. Every function builds a fresh value from literals.

mod dashboard;
mod notify;

pub use dashboard::*;
pub use notify::*;
