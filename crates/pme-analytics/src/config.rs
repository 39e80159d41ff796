//! Configuration for PME computation.

use pme_core::{PmeError, PmeResult, TransactionTypeId};
use pme_math::solvers::{SolverConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
use serde::{Deserialize, Serialize};

/// Transaction type id tagging contributions unless configured otherwise.
pub const DEFAULT_CONTRIBUTION_TYPE: TransactionTypeId = TransactionTypeId::new(1);

/// Transaction type id tagging distributions unless configured otherwise.
pub const DEFAULT_DISTRIBUTION_TYPE: TransactionTypeId = TransactionTypeId::new(2);

/// Root-finder settings used by every XIRR evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct XirrSolverSettings {
    /// Absolute tolerance on the rate.
    pub tolerance: f64,
    /// Iteration cap; reaching it makes the XIRR undefined.
    pub max_iterations: u32,
}

impl Default for XirrSolverSettings {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl XirrSolverSettings {
    /// Converts to the solver's own configuration.
    #[must_use]
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig::new(self.tolerance, self.max_iterations)
    }
}

/// Configuration for the PME algorithms.
///
/// Every field has a default, so a partial JSON document is a valid config.
///
/// ```rust
/// use pme_analytics::config::PmeConfig;
///
/// let config = PmeConfig::from_json(r#"{"calculate_xirr": true}"#).unwrap();
/// assert!(config.calculate_xirr);
/// assert!(!config.calculate_tvpi);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PmeConfig {
    /// Transaction type id that marks a contribution.
    pub contribution_type: TransactionTypeId,

    /// Transaction type id that marks a distribution.
    pub distribution_type: TransactionTypeId,

    /// Attach a running XIRR to each benchmark return.
    pub calculate_xirr: bool,

    /// Attach DPI, RVPI and TVPI to each benchmark return.
    pub calculate_tvpi: bool,

    /// XIRR root-finder settings.
    pub solver: XirrSolverSettings,
}

impl Default for PmeConfig {
    fn default() -> Self {
        Self {
            contribution_type: DEFAULT_CONTRIBUTION_TYPE,
            distribution_type: DEFAULT_DISTRIBUTION_TYPE,
            calculate_xirr: false,
            calculate_tvpi: false,
            solver: XirrSolverSettings::default(),
        }
    }
}

impl PmeConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a config from JSON and checks the solver settings.
    pub fn from_json(json: &str) -> PmeResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| PmeError::config(e.to_string()))?;
        config
            .solver_config()
            .validate()
            .map_err(|e| PmeError::config(e.to_string()))?;
        Ok(config)
    }

    /// Sets the contribution transaction type id.
    #[must_use]
    pub fn with_contribution_type(mut self, transaction_type: TransactionTypeId) -> Self {
        self.contribution_type = transaction_type;
        self
    }

    /// Sets the distribution transaction type id.
    #[must_use]
    pub fn with_distribution_type(mut self, transaction_type: TransactionTypeId) -> Self {
        self.distribution_type = transaction_type;
        self
    }

    /// Sets whether to compute the running XIRR.
    #[must_use]
    pub fn with_xirr(mut self, enabled: bool) -> Self {
        self.calculate_xirr = enabled;
        self
    }

    /// Sets whether to compute paid-in multiples.
    #[must_use]
    pub fn with_tvpi(mut self, enabled: bool) -> Self {
        self.calculate_tvpi = enabled;
        self
    }

    /// Sets the XIRR solver settings.
    #[must_use]
    pub fn with_solver(mut self, solver: XirrSolverSettings) -> Self {
        self.solver = solver;
        self
    }

    /// Solver configuration derived from [`PmeConfig::solver`].
    #[must_use]
    pub fn solver_config(&self) -> SolverConfig {
        self.solver.solver_config()
    }
}
