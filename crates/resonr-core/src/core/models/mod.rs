//! # Core Models Module
//!
//! This module contains the fundamental data structures used to represent evaluated
//! resonance data and reconstructed cross sections, providing the foundation for all
//! reconstruction operations.
//!
//! ## Overview
//!
//! The models module defines the core abstractions for evaluated-data input and
//! tabulated output. These models are designed to:
//!
//! - **Represent evaluated parameters faithfully** - Energy ranges, channels, and
//!   resonance records exactly as the evaluation carries them
//! - **Rule out invalid states** - Mutually exclusive parameter sets are tagged sum
//!   types, never nullable alternatives
//! - **Stay immutable** - Inputs are constructed once by the caller and only read here
//! - **Maintain type safety** - Interpolation laws and formalism tags are closed enums
//!
//! ## Key Components
//!
//! - [`cross_section`] - The five-channel cross-section vector and its accumulation rules
//! - [`range`] - Energy ranges, formalism tags, and scattering-radius variants
//! - [`resonance`] - Per-channel resonance records and unresolved-region statistical tables
//! - [`table`] - Interpolation laws and piecewise-tabulated functions

pub mod cross_section;
pub mod range;
pub mod resonance;
pub mod table;
