/// Date part of an ISO date or datetime string.
///
/// Example: "2024-03-15T00:00:00.000Z" -> "2024-03-15"
pub fn date_part(value: &str) -> &str {
    value.split('T').next().unwrap_or(value)
}
