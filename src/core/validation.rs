use crate::constants::MAX_NAME_LENGTH;
use crate::core::errors::SquadError;

pub fn validate_string_input(field: &str, value: &str, max_length: usize) -> Result<(), SquadError> {
    if value.trim().is_empty() {
        return Err(SquadError::invalid_input(
            field,
            format!("Invalid {}", field),
            format!("{} cannot be empty", field),
        ));
    }
    if value.chars().count() > max_length {
        return Err(SquadError::invalid_input(
            field,
            format!("{} Too Long", field),
            format!("{} cannot exceed {} characters", field, max_length),
        ));
    }
    if value.chars().any(|c| c.is_control() || "<>{}[]".contains(c)) {
        return Err(SquadError::invalid_input(
            field,
            format!("Invalid {}", field),
            format!("{} contains invalid characters", field),
        ));
    }
    Ok(())
}

/// Validates a display name and returns it with surrounding whitespace removed.
pub fn validate_name(field: &str, value: &str) -> Result<String, SquadError> {
    let trimmed = value.trim();
    validate_string_input(field, trimmed, MAX_NAME_LENGTH)?;
    Ok(trimmed.to_string())
}
