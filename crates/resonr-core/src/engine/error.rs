use thiserror::Error;

use super::config::ConfigError;
use crate::core::math::penetration::UnsupportedOrbitalMomentum;
use crate::core::models::range::{Formalism, RangeKind};
use crate::core::models::table::TabulationError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Unsupported formalism {formalism:?} for a {kind:?} range")]
    UnsupportedFormalism {
        kind: RangeKind,
        formalism: Formalism,
    },

    #[error(transparent)]
    OrbitalMomentum(#[from] UnsupportedOrbitalMomentum),

    #[error("{formalism} evaluation is missing required parameters: {message}")]
    InsufficientParameters {
        formalism: &'static str,
        message: String,
    },

    #[error("Non-finite value encountered during {context} near x = {x}")]
    Numeric { context: &'static str, x: f64 },

    #[error(transparent)]
    Tabulation(#[from] TabulationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
