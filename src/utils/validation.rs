use validator::Validate;
use crate::errors::AppError;

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate()
        .map_err(|err| AppError::BadRequest(err.to_string()))
}

pub fn validate_positive(field: &str, value: f64) -> Result<(), AppError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::InvalidInput(format!("{} must be a positive number", field)));
    }
    Ok(())
}

pub fn validate_expenditure_input(weight_kg: f64, met_value: f64, duration_minutes: u32) -> Result<(), AppError> {
    validate_positive("weightKg", weight_kg)?;
    validate_positive("metValue", met_value)?;
    if duration_minutes == 0 {
        return Err(AppError::InvalidInput("durationMinutes must be at least 1".to_string()));
    }
    Ok(())
}

pub fn validate_met_range(min_met: f64, max_met: f64) -> Result<(), AppError> {
    if !min_met.is_finite() || !max_met.is_finite() {
        return Err(AppError::InvalidInput("MET bounds must be finite numbers".to_string()));
    }
    if min_met > max_met {
        return Err(AppError::InvalidInput(format!(
            "minMet ({}) must not exceed maxMet ({})",
            min_met, max_met
        )));
    }
    Ok(())
}
