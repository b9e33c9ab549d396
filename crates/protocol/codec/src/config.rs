//! Hydrator configuration.

/// Options applied by the [`crate::Hydrator`] when converting decoded records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct HydratorConfig {
    /// Maximum number of console bytes kept per action trace. `None` keeps the whole output.
    pub max_console_length: Option<usize>,
}

impl HydratorConfig {
    /// Limits the console output kept per action trace to `max` bytes.
    pub const fn with_max_console_length(mut self, max: usize) -> Self {
        self.max_console_length = Some(max);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keeps_full_console() {
        assert_eq!(HydratorConfig::default().max_console_length, None);
        assert_eq!(
            HydratorConfig::default().with_max_console_length(64).max_console_length,
            Some(64)
        );
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_config_serde() {
        let config: HydratorConfig = serde_json::from_str(r#"{"maxConsoleLength":128}"#).unwrap();
        assert_eq!(config, HydratorConfig::default().with_max_console_length(128));

        let config: HydratorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, HydratorConfig::default());
    }
}
