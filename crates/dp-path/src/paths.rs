//! The output of one simulation call.

use dp_core::Year;

/// Unemployment and NILF stocks for every simulated year.
///
/// Both sequences have exactly `horizon` entries; index `i` is
/// `Year::from_index(i)`.  Values are shares of total employment.
#[derive(Clone, Debug, PartialEq)]
pub struct Paths {
    unemployment: Vec<f64>,
    nilf:         Vec<f64>,
}

impl Paths {
    pub(crate) fn with_capacity(horizon: usize) -> Self {
        Self {
            unemployment: Vec::with_capacity(horizon),
            nilf:         Vec::with_capacity(horizon),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, unemployment: f64, nilf: f64) {
        self.unemployment.push(unemployment);
        self.nilf.push(nilf);
    }

    pub fn unemployment(&self) -> &[f64] {
        &self.unemployment
    }

    pub fn nilf(&self) -> &[f64] {
        &self.nilf
    }

    /// Number of simulated years.
    pub fn horizon(&self) -> usize {
        self.unemployment.len()
    }

    /// Unemployment stock in the final year.
    ///
    /// Paths are never empty: `simulate` rejects a zero horizon.
    pub fn terminal_unemployment(&self) -> f64 {
        self.unemployment.last().copied().unwrap_or(0.0)
    }

    /// NILF stock in the final year.
    pub fn terminal_nilf(&self) -> f64 {
        self.nilf.last().copied().unwrap_or(0.0)
    }

    /// `(year, unemployment, nilf)` rows in year order — the shape a plotting
    /// or tabulating consumer wants.
    pub fn iter_years(&self) -> impl Iterator<Item = (Year, f64, f64)> + '_ {
        self.unemployment
            .iter()
            .zip(&self.nilf)
            .enumerate()
            .map(|(i, (&u, &n))| (Year::from_index(i), u, n))
    }

    /// Consume into `(unemployment, nilf)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.unemployment, self.nilf)
    }
}
