//! # Math Module
//!
//! Pure mathematical building blocks for resonance reconstruction.
//!
//! ## Key Components
//!
//! - [`matrix`] - Symmetric and complex-symmetric matrix inversion for R-matrix channel math
//! - [`shapes`] - The symmetric (psi) and antisymmetric (chi) resonance line-shape profiles
//! - [`penetration`] - Wave numbers, hard-sphere phase shifts, penetration and level-shift factors
//! - [`legendre`] - Legendre polynomial and series evaluation for angular distributions
//! - [`quadrature`] - Porter-Thomas width-fluctuation averaging over fixed quadrature tables

pub mod legendre;
pub mod matrix;
pub mod penetration;
pub mod quadrature;
pub mod shapes;
