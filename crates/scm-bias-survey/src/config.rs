use std::collections::HashSet;

use scm_bias_core::{Dimension, QuadrantPolicy, SCALE_MIDPOINT};
use scm_bias_questionnaire::{item_count, DEFAULT_GROUPS, LIKERT_MAX, LIKERT_MIN};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Static survey shape handed to [`crate::SurveyState::new`].
///
/// Missing JSON fields fall back to the built-in questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyConfig {
    pub warmth_items: usize,
    pub competence_items: usize,
    pub scale_min: u8,
    pub scale_max: u8,
    pub threshold: f64,
    pub default_groups: Vec<String>,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            warmth_items: item_count(Dimension::Warmth),
            competence_items: item_count(Dimension::Competence),
            scale_min: LIKERT_MIN,
            scale_max: LIKERT_MAX,
            threshold: SCALE_MIDPOINT,
            default_groups: DEFAULT_GROUPS.iter().map(|g| (*g).to_string()).collect(),
        }
    }
}

impl SurveyConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for dimension in Dimension::ALL {
            let count = self.item_count(dimension);
            let available = item_count(dimension);
            if !(1..=available).contains(&count) {
                return Err(ConfigError::Invalid(format!(
                    "{dimension} item count {count} outside 1..={available}"
                )));
            }
        }

        if self.scale_min < LIKERT_MIN || self.scale_max > LIKERT_MAX {
            return Err(ConfigError::Invalid(format!(
                "scale {}..={} outside {LIKERT_MIN}..={LIKERT_MAX}",
                self.scale_min, self.scale_max
            )));
        }
        if self.scale_min > self.scale_max {
            return Err(ConfigError::Invalid(format!(
                "scale_min {} exceeds scale_max {}",
                self.scale_min, self.scale_max
            )));
        }
        let (min, max) = (f64::from(self.scale_min), f64::from(self.scale_max));
        if !(min..=max).contains(&self.threshold) {
            return Err(ConfigError::Invalid(format!(
                "threshold {} outside scale {min}..={max}",
                self.threshold
            )));
        }

        let mut seen = HashSet::new();
        for group in &self.default_groups {
            let name = group.trim();
            if name.is_empty() {
                return Err(ConfigError::Invalid(
                    "default group name cannot be blank".to_string(),
                ));
            }
            if !seen.insert(name) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate default group: {name}"
                )));
            }
        }
        Ok(())
    }

    pub fn item_count(&self, dimension: Dimension) -> usize {
        match dimension {
            Dimension::Warmth => self.warmth_items,
            Dimension::Competence => self.competence_items,
        }
    }

    pub fn policy(&self) -> QuadrantPolicy {
        QuadrantPolicy::new(self.threshold)
    }

    /// Narrows `value` to a stored rating if it lies on the configured scale.
    pub fn rating(&self, value: i64) -> Option<u8> {
        u8::try_from(value)
            .ok()
            .filter(|v| (self.scale_min..=self.scale_max).contains(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_questionnaire() {
        let config = SurveyConfig::default();
        assert_eq!(config.warmth_items, 5);
        assert_eq!(config.competence_items, 5);
        assert_eq!((config.scale_min, config.scale_max), (1, 7));
        assert_eq!(
            config.default_groups,
            vec!["Cloud Engineering", "Compliance (Regional)"]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn json_overrides_merge_with_defaults() {
        let config = SurveyConfig::from_json_str(r#"{"warmth_items": 3, "default_groups": []}"#)
            .expect("parse config");
        assert_eq!(config.warmth_items, 3);
        assert_eq!(config.competence_items, 5);
        assert!(config.default_groups.is_empty());
    }

    #[test]
    fn rejects_inverted_scale_and_stray_threshold() {
        let err = SurveyConfig::from_json_str(r#"{"scale_min": 5, "scale_max": 3}"#)
            .expect_err("inverted scale");
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = SurveyConfig::from_json_str(r#"{"threshold": 9.5}"#).expect_err("threshold");
        assert!(err.to_string().contains("threshold"));
    }

    #[test]
    fn rejects_duplicate_default_groups_after_trim() {
        let err = SurveyConfig::from_json_str(r#"{"default_groups": ["Ops", " Ops "]}"#)
            .expect_err("duplicate");
        assert!(err.to_string().contains("duplicate default group"));
    }

    #[test]
    fn rejects_item_counts_without_questionnaire_items() {
        for raw in [
            r#"{"warmth_items": 0}"#,
            r#"{"competence_items": 0}"#,
            r#"{"warmth_items": 6}"#,
            r#"{"warmth_items": 18446744073709551615}"#,
        ] {
            let err = SurveyConfig::from_json_str(raw).expect_err(raw);
            assert!(err.to_string().contains("item count"), "{raw}: {err}");
        }
    }

    #[test]
    fn rejects_scale_beyond_likert_bounds() {
        for raw in [r#"{"scale_min": 0}"#, r#"{"scale_max": 8}"#, r#"{"scale_max": 255}"#] {
            let err = SurveyConfig::from_json_str(raw).expect_err(raw);
            assert!(matches!(err, ConfigError::Invalid(_)), "{raw}");
        }
        assert!(SurveyConfig::from_json_str(r#"{"scale_min": 2, "scale_max": 6}"#).is_ok());
    }

    #[test]
    fn malformed_json_is_a_serde_error() {
        let err = SurveyConfig::from_json_str("{").expect_err("malformed");
        assert!(matches!(err, ConfigError::Serde(_)));
    }

    #[test]
    fn rating_accepts_only_the_configured_scale() {
        let config = SurveyConfig::default();
        assert_eq!(config.rating(1), Some(1));
        assert_eq!(config.rating(7), Some(7));
        assert_eq!(config.rating(0), None);
        assert_eq!(config.rating(8), None);
        assert_eq!(config.rating(-3), None);
        assert_eq!(config.rating(263), None);
    }
}
