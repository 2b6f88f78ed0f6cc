//! Strategy lists described by name.
//!
//! Lets callers keep the strategy order in a configuration file instead of
//! code. Names map onto the built-in strategies; anything else is rejected
//! when the lists are resolved.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::extraction::{self, ExtractionStrategies, ExtractionStrategy};
use crate::injection::{self, InjectionStrategies, InjectionStrategy};
use crate::{ReflectionError, ReflectionResult};

/// Names of the strategies to use, in precedence order.
///
/// Missing keys fall back to the default lists.
///
/// # Examples
///
/// ```
/// use prop_reflect::StrategyConfig;
///
/// let config: StrategyConfig =
///     serde_json::from_str(r#"{ "injection": ["setter", "reflection"] }"#)?;
/// let injection = config.injection_strategies()?;
///
/// assert_eq!(injection.names(), ["setter", "reflection"]);
/// assert_eq!(
///     config.extraction_strategies()?.names(),
///     ["getter", "named_method", "reflection"]
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StrategyConfig {
    /// Injection strategy names.
    pub injection: Vec<String>,
    /// Extraction strategy names.
    pub extraction: Vec<String>,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            injection: to_owned_names(&InjectionStrategies::defaults().names()),
            extraction: to_owned_names(&ExtractionStrategies::defaults().names()),
        }
    }
}

impl StrategyConfig {
    /// Resolves the injection list.
    ///
    /// # Errors
    ///
    /// Returns [`ReflectionError::UnknownStrategy`] for an unknown name.
    pub fn injection_strategies(&self) -> ReflectionResult<InjectionStrategies> {
        self.injection
            .iter()
            .map(|name| injection_strategy(name))
            .collect::<ReflectionResult<Vec<_>>>()
            .map(|strategies| strategies.into_iter().collect())
    }

    /// Resolves the extraction list.
    ///
    /// # Errors
    ///
    /// Returns [`ReflectionError::UnknownStrategy`] for an unknown name.
    pub fn extraction_strategies(&self) -> ReflectionResult<ExtractionStrategies> {
        self.extraction
            .iter()
            .map(|name| extraction_strategy(name))
            .collect::<ReflectionResult<Vec<_>>>()
            .map(|strategies| strategies.into_iter().collect())
    }
}

fn to_owned_names(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_owned()).collect()
}

fn injection_strategy(name: &str) -> ReflectionResult<Arc<dyn InjectionStrategy>> {
    match name {
        "setter" => Ok(Arc::new(injection::SetterStrategy)),
        "named_method" => Ok(Arc::new(injection::NamedMethodStrategy)),
        "reflection" => Ok(Arc::new(injection::ReflectionStrategy)),
        other => Err(ReflectionError::UnknownStrategy {
            kind: "injection",
            name: other.to_owned(),
        }),
    }
}

fn extraction_strategy(name: &str) -> ReflectionResult<Arc<dyn ExtractionStrategy>> {
    match name {
        "getter" => Ok(Arc::new(extraction::GetterStrategy)),
        "named_method" => Ok(Arc::new(extraction::NamedMethodStrategy)),
        "reflection" => Ok(Arc::new(extraction::ReflectionStrategy)),
        other => Err(ReflectionError::UnknownStrategy {
            kind: "extraction",
            name: other.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use anyhow::{Result, ensure};
    use rstest::rstest;
    use serde_json::json;

    use super::StrategyConfig;
    use crate::{ErrorKind, ReflectionError};

    #[rstest]
    fn default_config_matches_default_lists() -> Result<()> {
        let config = StrategyConfig::default();
        ensure!(
            config.injection_strategies()?.names() == ["setter", "named_method", "reflection"],
            "unexpected injection defaults: {:?}",
            config.injection
        );
        ensure!(
            config.extraction_strategies()?.names() == ["getter", "named_method", "reflection"],
            "unexpected extraction defaults: {:?}",
            config.extraction
        );
        Ok(())
    }

    #[rstest]
    fn missing_keys_fall_back_to_defaults() -> Result<()> {
        let config: StrategyConfig = serde_json::from_value(json!({ "extraction": [] }))?;
        ensure!(config.extraction_strategies()?.is_empty(), "extraction should be empty");
        ensure!(
            config.injection_strategies()?.len() == 3,
            "injection should keep the defaults"
        );
        Ok(())
    }

    #[rstest]
    #[case::injection(json!({ "injection": ["setter", "magic"] }), "injection")]
    #[case::extraction(json!({ "extraction": ["getter", "magic"] }), "extraction")]
    fn unknown_names_are_invalid_arguments(
        #[case] input: serde_json::Value,
        #[case] expected_kind: &str,
    ) -> Result<()> {
        let config: StrategyConfig = serde_json::from_value(input)?;
        let err = match expected_kind {
            "injection" => config.injection_strategies().map(|_| ()),
            _ => config.extraction_strategies().map(|_| ()),
        }
        .expect_err("magic is not a strategy");
        ensure!(err.kind() == ErrorKind::InvalidArgument, "wrong kind: {err:?}");
        ensure!(
            matches!(
                &err,
                ReflectionError::UnknownStrategy { kind, name } if *kind == expected_kind && name == "magic"
            ),
            "unexpected error: {err:?}"
        );
        Ok(())
    }

    #[rstest]
    fn unknown_keys_are_rejected() {
        let parsed = serde_json::from_value::<StrategyConfig>(json!({ "inject": ["setter"] }));
        assert!(parsed.is_err());
    }
}
