//! mindcare-session
//!
//! The explicit session object: owns the in-memory caches of the three
//! persisted collections and the assessment engine, loads them from the
//! store at init, and writes through on every mutation. One explicit
//! lifecycle — init, mutate, teardown — instead of ambient globals.

pub mod error;
mod load;
pub mod session;

pub use error::SessionError;
pub use session::{ChatExchange, Session};
