//! Mind Map Layout Generation
//!
//! The pure core of the crate: turning a summary's markdown text and topic
//! rows into a renderable radial graph. No I/O, no shared state, bounded
//! time; safe to call concurrently from any number of tasks.

pub mod radial;

pub use radial::{generate_mind_map, ROOT_LABEL};
