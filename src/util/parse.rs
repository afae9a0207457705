use crate::error::config::ConfigError;

/// Parses a comma-separated list of guild IDs.
///
/// Blank entries and surrounding whitespace are ignored. Repeated IDs are kept once,
/// in order of first appearance, so a guild is never fetched twice in one run.
///
/// # Arguments
/// - `var` - Name of the environment variable the list came from, for error reporting
/// - `value` - The raw list, e.g. `"123, 456"`
///
/// # Returns
/// - `Ok(Vec<u64>)` - Parsed IDs, possibly empty
/// - `Err(ConfigError::InvalidGuildId)` - An entry is not a non-zero u64
pub fn parse_guild_ids(var: &str, value: &str) -> Result<Vec<u64>, ConfigError> {
    let mut ids = Vec::new();

    for entry in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let id = entry
            .parse::<u64>()
            .ok()
            .filter(|id| *id != 0)
            .ok_or_else(|| ConfigError::InvalidGuildId {
                var: var.to_string(),
                value: entry.to_string(),
            })?;

        if !ids.contains(&id) {
            ids.push(id);
        }
    }

    Ok(ids)
}
