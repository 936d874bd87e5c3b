use validator::{Validate, ValidationError};

/// Largest supported number of spin states; bounds any fixed-size
/// magnetization buffer a driver may hold.
pub const Q_MAX: u8 = 20;

fn validate_model_config(cfg: &ModelConfig) -> Result<(), ValidationError> {
    if cfg.q < 1 || cfg.q > Q_MAX {
        return Err(ValidationError::new("q must be in 1..=Q_MAX"));
    }
    if !cfg.beta.is_finite() || cfg.beta < 0.0 {
        return Err(ValidationError::new("beta must be finite and >= 0"));
    }
    Ok(())
}

/// Potts model parameters, immutable for the duration of a run.
#[derive(Debug, Clone, Copy, Validate)]
#[validate(schema(function = "validate_model_config"))]
pub struct ModelConfig {
    /// Number of spin states; every spin label lies in `[0, q-1]`.
    pub q: u8,
    /// Inverse temperature; larger values favor ordered configurations.
    pub beta: f64,
}

fn validate_sim_config(cfg: &SimConfig) -> Result<(), ValidationError> {
    if cfg.n_sweeps < 1 {
        return Err(ValidationError::new("n_sweeps must be >= 1"));
    }
    if cfg.warmup_sweeps > cfg.n_sweeps {
        return Err(ValidationError::new("warmup_sweeps must be <= n_sweeps"));
    }
    if cfg.measure_interval < 1 {
        return Err(ValidationError::new("measure_interval must be >= 1"));
    }
    Ok(())
}

/// Run-loop settings.
#[derive(Debug, Clone, Validate)]
#[validate(schema(function = "validate_sim_config"))]
pub struct SimConfig {
    /// Total number of sweeps.
    pub n_sweeps: usize,
    /// Sweeps discarded before measurement starts.
    pub warmup_sweeps: usize,
    /// Measure observables every this many sweeps after warmup.
    pub measure_interval: usize,
    /// Process realizations on the current thread (no rayon overhead,
    /// useful when an outer level already saturates the cores).
    pub sequential: bool,
}
