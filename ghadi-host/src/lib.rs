//! Ghadi Host Library
//!
//! Traits the companion phone host implements for Ghadi watchface companions.
//!
//! This crate provides:
//! - Geolocation provider abstraction (`PositionSource`)
//! - Phone-to-watch messaging bridge abstraction (`MessageSink`)
//! - Local clock abstraction (`LocalClock`) with a system implementation
//!
//! Host-platform crates implement these traits against their own stacks;
//! `ghadi-companion` drives them.

pub mod clock;
pub mod position;
pub mod sink;

pub use clock::*;
pub use position::*;
pub use sink::*;
