//! Forecast type codes.

/// Forecast type codes used in parameter identifiers and content records.
pub mod forecast_types {
    pub const DETERMINISTIC: i32 = 1;
    pub const ANALYSIS: i32 = 2;
    /// Perturbed ensemble member
    pub const ENSEMBLE_PERTURBED: i32 = 3;
    /// Ensemble control run
    pub const ENSEMBLE_CONTROL: i32 = 4;
}

/// Whether a forecast type denotes an ensemble member, in which case the
/// forecast number selects the member.
pub fn is_ensemble_forecast(forecast_type: i32) -> bool {
    matches!(
        forecast_type,
        forecast_types::ENSEMBLE_PERTURBED | forecast_types::ENSEMBLE_CONTROL
    )
}
