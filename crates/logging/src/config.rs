//! crates/logging/src/config.rs
//! Verbosity configuration across the engine's diagnostic categories.

use super::levels::{Category, CategoryLevels};

/// Per-category verbosity for the engine's tracing output.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerbosityConfig {
    /// Level of each category.
    pub levels: CategoryLevels,
}

impl VerbosityConfig {
    /// Create a configuration from a verbose level (0-3).
    ///
    /// Level 1 reports catalogue and statistics activity, level 2 adds mask
    /// and policy decisions at debug level and level 3 enables trace events
    /// everywhere.
    #[must_use]
    pub fn from_verbose_level(level: u8) -> Self {
        let mut config = Self::default();

        match level {
            0 => {}
            1 => {
                config.levels.catalogue = 1;
                config.levels.stats = 1;
            }
            2 => config.levels.set_all(2),
            _ => config.levels.set_all(3),
        }

        config
    }

    /// Apply a single flag token (e.g., "policy2", "mask").
    pub fn apply_flag(&mut self, token: &str) -> Result<(), String> {
        let (name, level) = parse_flag_token(token)?;
        let category =
            Category::from_name(name).ok_or_else(|| format!("unknown debug flag: {name}"))?;
        self.levels.set(category, level);
        Ok(())
    }

    /// Renders the configuration as an `EnvFilter` directive string.
    ///
    /// Events from other targets are limited to warnings.
    #[must_use]
    pub fn filter_directives(&self) -> String {
        let mut directives = String::from("warn");
        for category in Category::ALL {
            directives.push(',');
            directives.push_str(category.target());
            directives.push('=');
            directives.push_str(level_name(self.levels.get(category)));
        }
        directives
    }
}

fn level_name(level: u8) -> &'static str {
    match level {
        0 => "off",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Parse a flag token like "policy2" into ("policy", 2) or "mask" into ("mask", 1).
fn parse_flag_token(token: &str) -> Result<(&str, u8), String> {
    if token.is_empty() {
        return Err("empty flag token".to_string());
    }

    match token.find(|c: char| c.is_ascii_digit()) {
        Some(pos) => {
            let level = token[pos..]
                .parse::<u8>()
                .map_err(|_| format!("invalid level in flag: {token}"))?;
            Ok((&token[..pos], level))
        }
        None => Ok((token, 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_zero_is_silent() {
        let config = VerbosityConfig::from_verbose_level(0);
        assert_eq!(config, VerbosityConfig::default());
        assert_eq!(
            config.filter_directives(),
            "warn,dar::mask=off,dar::policy=off,dar::catalogue=off,dar::stats=off"
        );
    }

    #[test]
    fn level_one_reports_catalogue_and_stats() {
        let config = VerbosityConfig::from_verbose_level(1);
        assert_eq!(config.levels.catalogue, 1);
        assert_eq!(config.levels.stats, 1);
        assert_eq!(config.levels.mask, 0);
        assert_eq!(config.levels.policy, 0);
    }

    #[test]
    fn high_levels_saturate_at_trace() {
        let config = VerbosityConfig::from_verbose_level(7);
        assert!(Category::ALL.iter().all(|c| config.levels.get(*c) == 3));
        assert!(config.filter_directives().ends_with("dar::stats=trace"));
    }

    #[test]
    fn test_parse_flag_token() {
        assert_eq!(parse_flag_token("mask").unwrap(), ("mask", 1));
        assert_eq!(parse_flag_token("policy2").unwrap(), ("policy", 2));
        assert_eq!(parse_flag_token("stats10").unwrap(), ("stats", 10));
        assert!(parse_flag_token("").is_err());
        assert!(parse_flag_token("mask999").is_err());
    }

    #[test]
    fn apply_flag_updates_one_category() {
        let mut config = VerbosityConfig::default();

        config.apply_flag("policy").unwrap();
        assert_eq!(config.levels.policy, 1);

        config.apply_flag("policy3").unwrap();
        assert_eq!(config.levels.policy, 3);
        assert_eq!(config.levels.mask, 0);

        let error = config.apply_flag("flist2").unwrap_err();
        assert!(error.contains("flist"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let config = VerbosityConfig::from_verbose_level(2);
        let json = serde_json::to_string(&config).unwrap();
        let back: VerbosityConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
