//! # Workflows Module
//!
//! This module provides the high-level entry points that orchestrate complete
//! reconstruction procedures.
//!
//! ## Overview
//!
//! Workflows are the top-level API of the library. They tie the formalism
//! evaluators and the adaptive linearization engine together, handle progress
//! reporting, and organize results, providing a simple entry point for
//! complex reconstruction tasks.
//!
//! ## Architecture
//!
//! - **Reconstruction Workflow** ([`reconstruct`]) - Turns a set of evaluated
//!   energy ranges into a single linearized cross-section table, with
//!   per-channel tolerance enforcement and point-count milestones.

pub mod reconstruct;
