//! Sink and telemetry implementations.
//!
//! This module contains concrete implementations of the traits
//! defined in [`crate::traits`].
//!
//! # Available Implementations
//!
//! - `mock`: Test doubles for desktop development (requires `std`)
//! - `graphics`: `embedded-graphics` bar and label renderer (requires `display` feature)

#[cfg(feature = "std")]
pub mod mock;

#[cfg(feature = "display")]
pub mod graphics;

#[cfg(feature = "std")]
pub use mock::*;

#[cfg(feature = "display")]
pub use graphics::*;
