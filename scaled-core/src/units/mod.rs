//! Predefined units.
//!
//! `scaled-core` ships a small set of built-in units so that common tick sizes work out of the box.
//!
//! ## Modules
//!
//! - [`prefix`]: SI prefixes as anonymous [`Ratio`](crate::Ratio) types (`Milli = 1/1000`, `Kilo = 1000`, …).
//! - [`time`]: named time units from nanoseconds to weeks (SI second is the base unit).

pub mod prefix;
pub mod time;
