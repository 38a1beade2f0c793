//! Runtime settings, overridable from `HOTELGEN_*` environment variables.

/// Generation settings shared by the orchestrators.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Global ceiling on triangles per build; per-request budgets are
    /// clamped to this.
    pub max_triangles: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_triangles: config::constants::MAX_TRIANGLES,
        }
    }
}

impl Settings {
    /// Reads settings from the environment, falling back to defaults for
    /// unset or unparseable values.
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        if let Ok(raw) = std::env::var("HOTELGEN_MAX_TRIANGLES") {
            if let Ok(value) = raw.parse::<usize>() {
                settings.max_triangles = value;
            }
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_global_ceiling() {
        assert_eq!(Settings::default().max_triangles, config::constants::MAX_TRIANGLES);
    }
}
