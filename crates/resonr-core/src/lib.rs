//! # Resonr Core Library
//!
//! A modernized, high-performance library for reconstructing continuous-energy neutron
//! cross sections from evaluated resonance parameters, and for converting arbitrary
//! tabulated or parametric physical functions into bounded-error piecewise-linear tables.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear separation
//! of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`EnergyRange`,
//!   `CrossSection`, `Tabulated`), and pure mathematical building blocks (resonance line
//!   shapes, barrier penetrabilities, the complex-symmetric matrix solver, quadrature tables).
//!
//! - **[`engine`]: The Logic Core.** This layer hosts the resonance formalism evaluators
//!   (single- and multi-level Breit-Wigner, Reich-Moore, Adler-Adler, and the unresolved-region
//!   statistical models), the adaptive linearization engine, and the supporting configuration,
//!   progress, and error machinery.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing layer. It ties
//!   the `engine` and `core` together to execute complete reconstruction procedures, turning a
//!   set of evaluated energy ranges into a single linearized cross-section table.

pub mod core;
pub mod engine;
pub mod workflows;
