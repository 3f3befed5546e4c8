/// Configuration for the interval equation solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct Config {
    /// Relative tolerance used when Case 3 compares its two bound pairs.
    pub equality_rel_tol: f64,
    /// Absolute tolerance used when Case 3 compares its two bound pairs.
    pub equality_abs_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            equality_rel_tol: 1e-9,
            equality_abs_tol: 1e-12,
        }
    }
}

impl Config {
    /// Validates that all tolerances are finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if any tolerance is negative or non-finite.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.equality_rel_tol.is_finite() || self.equality_rel_tol < 0.0 {
            return Err("equality_rel_tol must be finite and non-negative");
        }
        if !self.equality_abs_tol.is_finite() || self.equality_abs_tol < 0.0 {
            return Err("equality_abs_tol must be finite and non-negative");
        }
        Ok(())
    }

    /// Returns true if `x` and `y` are equal within the configured tolerances.
    #[must_use]
    pub fn coincide(&self, x: f64, y: f64) -> bool {
        (x - y).abs() <= self.equality_abs_tol + self.equality_rel_tol * x.abs().max(y.abs())
    }
}
