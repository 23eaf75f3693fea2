/// Configuration for the fixed-point solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Maximum number of map applications before giving up.
    pub max_iters: usize,
    /// Iteration stops once `|x_next - x| < abs_tol`.
    pub abs_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            abs_tol: 1e-12,
        }
    }
}

impl Config {
    /// Validates the iteration cap and tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero or `abs_tol` is not a finite,
    /// strictly positive number.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.max_iters == 0 {
            return Err("max_iters must be at least one");
        }
        if !self.abs_tol.is_finite() || self.abs_tol <= 0.0 {
            return Err("abs_tol must be finite and positive");
        }
        Ok(())
    }
}
