//! mindcare-responder
//!
//! Deterministic keyword-to-category chat responders. Two personas — the
//! peer support bot and the therapist — share one classification engine and
//! differ only in their tables. Replies are canned text chosen uniformly at
//! random from the matched category.

pub mod delay;
pub mod personas;
pub mod roster;
pub mod table;

pub use delay::ReplyScheduler;
pub use table::{PersonaTable, ResponseCategory};
