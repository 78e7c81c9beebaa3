pub mod constants;
pub mod ellipse;
pub mod insolation_errors;
pub mod kepler;
pub mod orbit;
pub mod planet;
pub mod root_finding;
pub mod solar;
