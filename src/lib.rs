pub mod accumulator;
pub mod client;
pub mod config;
pub mod error;
pub mod matcher;
pub mod scanner;

// Convenient re-exports
pub use accumulator::ResponseAccumulator;
pub use client::{fetch_into, BodySource, HttpSource, StaticSource};
pub use matcher::{report_known_fields, KnownFieldMatcher};
pub use scanner::{scan, Descend, NodeKind};
