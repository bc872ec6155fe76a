//! # Engine Module
//!
//! This module implements the reconstruction engine: the resonance formalism
//! evaluators and the adaptive linearization machinery, together with the
//! configuration, progress, and error infrastructure they share.
//!
//! ## Overview
//!
//! The engine turns evaluated parameters into point cross sections and point
//! cross sections into bounded-error piecewise-linear tables. It is purely
//! synchronous and side-effect-free apart from progress reporting and
//! structured diagnostics; every entry point is a pure function of its inputs.
//!
//! ## Architecture
//!
//! - **Formalism Evaluation** ([`formalisms`]) - One evaluator per resonance formalism,
//!   dispatched over the range kind and formalism tag
//! - **Adaptive Linearization** ([`linearize`]) - Stack-based bisection refinement of
//!   scalar and cross-section-valued functions under declared interpolation laws
//! - **Angular Distributions** ([`angular`]) - Linearization of closed-form Legendre
//!   distributions on the canonical domain
//! - **Configuration** ([`config`]) - Process-wide tuning constants with builder and
//!   TOML loading
//! - **Progress Monitoring** ([`progress`]) - Callback-based phase and milestone reporting
//! - **Error Handling** ([`error`]) - Engine-specific error types and propagation policy

pub mod angular;
pub mod config;
pub mod error;
pub mod formalisms;
pub mod linearize;
pub mod progress;
