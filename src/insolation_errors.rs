use thiserror::Error;

/// Errors raised while building parameter bundles.
///
/// The formulas themselves never return this type: out-of-domain input to a raw formula
/// propagates as a non-finite value from the underlying math primitive.
#[derive(Error, Debug)]
pub enum InsolationError {
    #[error("Invalid orbit parameter: {0}")]
    InvalidOrbitParameter(String),

    #[error("Invalid planet parameter: {0}")]
    InvalidPlanetParameter(String),

    #[error("Invalid solar model parameter: {0}")]
    InvalidSolarParameter(String),

    #[error("Orbit sampling needs at least {min} samples, got {got}")]
    NotEnoughSamples { min: usize, got: usize },
}

impl PartialEq for InsolationError {
    fn eq(&self, other: &Self) -> bool {
        use InsolationError::*;
        match (self, other) {
            (InvalidOrbitParameter(a), InvalidOrbitParameter(b)) => a == b,
            (InvalidPlanetParameter(a), InvalidPlanetParameter(b)) => a == b,
            (InvalidSolarParameter(a), InvalidSolarParameter(b)) => a == b,
            (
                NotEnoughSamples { min: m1, got: g1 },
                NotEnoughSamples { min: m2, got: g2 },
            ) => m1 == m2 && g1 == g2,
            _ => false,
        }
    }
}
