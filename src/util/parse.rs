use crate::error::internal::InternalError;

/// Parses a Discord snowflake from a string.
///
/// Surrounding whitespace is ignored; zero is rejected since Discord never issues it.
///
/// # Arguments
/// - `value` - The string to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed non-zero snowflake
/// - `Err(InternalError::ParseStringId)` - Failed to parse the string as a u64
pub fn parse_u64_from_string(value: &str) -> Result<u64, InternalError> {
    let trimmed = value.trim();
    let result = trimmed
        .parse::<std::num::NonZeroU64>()
        .map_err(|e| InternalError::ParseStringId {
            value: value.to_string(),
            source: e,
        })?;

    Ok(result.get())
}
