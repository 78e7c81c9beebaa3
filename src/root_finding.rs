//! # Scalar Newton–Raphson
//!
//! A minimal Newton–Raphson iteration for `f(x) = 0`, used by the Kepler solver.
//!
//! Unlike [`roots::find_root_newton_raphson`], this solver **never fails**: when the
//! iteration cap is reached it returns the last iterate, and a zero derivative simply
//! propagates a non-finite value. The stopping rule is expressed through the
//! [`roots::Convergency`] trait so callers can plug in their own criterion.

use roots::Convergency;
use tracing::warn;

use crate::constants::DEFAULT_MAX_ITERATIONS;

/// Step-size stopping rule: converged when two successive iterates differ by less than
/// `epsilon`.
///
/// `epsilon` is used as given, without taking its absolute value. A zero or negative
/// tolerance can then only be met by an exact fixed point (`x1 == x2`), which is accepted
/// because further iterations would return the same value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepConvergency {
    pub epsilon: f64,
    pub max_iter: usize,
}

impl StepConvergency {
    pub fn new(epsilon: f64) -> Self {
        StepConvergency {
            epsilon,
            max_iter: DEFAULT_MAX_ITERATIONS,
        }
    }

    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }
}

impl Convergency<f64> for StepConvergency {
    fn is_root_found(&mut self, y: f64) -> bool {
        y == 0.0
    }

    fn is_converged(&mut self, x1: f64, x2: f64) -> bool {
        x1 == x2 || (x1 - x2).abs() < self.epsilon
    }

    fn is_iteration_limit_reached(&mut self, iter: usize) -> bool {
        iter >= self.max_iter
    }
}

/// Solve `f(x) = 0` with the Newton–Raphson method.
///
/// Arguments
/// ---------
/// * `x0`: starting value
/// * `f`: function whose root is wanted
/// * `df`: derivative of `f`
/// * `convergency`: stopping rule, see [`StepConvergency`]
///
/// Return
/// ------
/// * the first iterate `x_{k+1}` such that the stopping rule accepts `(x_{k+1}, x_k)`,
///   or the last iterate when the iteration limit is reached (no error is signalled).
pub fn newton_raphson<F, D, C>(x0: f64, f: F, df: D, convergency: &mut C) -> f64
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
    C: Convergency<f64>,
{
    let mut x = x0;
    let mut iter = 0;
    while !convergency.is_iteration_limit_reached(iter) {
        let x1 = x - f(x) / df(x);
        if convergency.is_converged(x1, x) {
            return x1;
        }
        x = x1;
        iter += 1;
    }

    warn!(
        iterations = iter,
        last = x,
        "Newton-Raphson reached its iteration limit without converging"
    );
    x
}
