//! Paid-in capital multiples.

use pme_core::BenchmarkReturn;
use serde::{Deserialize, Serialize};

/// DPI, RVPI and TVPI of a (theoretical) investment at one date.
///
/// Distributions carry a negative sign, so DPI is `-distributed / paid_in`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PaidInMultiples {
    /// Distributions to paid-in capital
    pub dpi: f64,
    /// Residual value to paid-in capital
    pub rvpi: f64,
    /// Total value to paid-in capital
    pub tvpi: f64,
}

impl PaidInMultiples {
    /// Computes the multiples; all three are zero when nothing was paid in.
    #[must_use]
    pub fn compute(paid_in: f64, distributed: f64, residual: f64) -> Self {
        if paid_in == 0.0 {
            return Self::default();
        }
        let dpi = -distributed / paid_in;
        let rvpi = residual / paid_in;
        Self {
            dpi,
            rvpi,
            tvpi: dpi + rvpi,
        }
    }

    /// Writes the multiples onto a benchmark return.
    pub fn apply_to(self, target: &mut BenchmarkReturn) {
        target.dpi = Some(self.dpi);
        target.rvpi = Some(self.rvpi);
        target.tvpi = Some(self.tvpi);
    }
}
