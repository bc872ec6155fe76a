//! # Core Module
//!
//! This module provides the fundamental building blocks for continuous-energy
//! cross-section reconstruction, serving as the computational foundation of the library.
//!
//! ## Overview
//!
//! The core module implements the data structures and pure mathematics required to
//! evaluate nuclear-resonance formalisms and to represent their tabulated output. It
//! carries no algorithmic state: everything here is either an immutable value type or a
//! closed-form function.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules that handle different aspects
//! of the reconstruction problem:
//!
//! - **Evaluated-Data Representation** ([`models`]) - Energy ranges, angular-momentum
//!   channels, resonance records, cross-section vectors, and interpolation tables
//! - **Mathematical Building Blocks** ([`math`]) - Resonance line shapes, barrier
//!   penetrabilities and phase shifts, Legendre series, Porter-Thomas quadrature,
//!   and the symmetric/complex-symmetric matrix solver
//!
//! ## Scientific Foundation
//!
//! The implemented quantities follow established evaluated-nuclear-data practice:
//!
//! - **Breit-Wigner line shapes** expressed through the symmetric (psi) and
//!   antisymmetric (chi) profile functions
//! - **Hard-sphere phase shifts, penetration and level-shift factors** in closed form
//!   for orbital angular momenta up to `l = 4`
//! - **R-matrix channel mathematics** via small complex symmetric matrix inversion
//! - **Porter-Thomas width-fluctuation averaging** over fixed quadrature tables

pub mod math;
pub mod models;
