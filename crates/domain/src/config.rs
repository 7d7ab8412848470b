// crates/domain/src/config.rs
use derive_builder::Builder;
use roster_shared_kernel::{DomainError, DomainResult, ErrorContext, Gpa, Result};
use serde::{Deserialize, Serialize};

/// Thresholds used by the roster queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate_fields"))]
#[serde(default, deny_unknown_fields)]
pub struct QueryConfig {
    /// Students strictly below this GPA are failing.
    #[builder(default = "Gpa::PASSING")]
    pub passing_gpa: Gpa,
    /// Students younger than this are underage.
    #[builder(default = "18")]
    pub age_of_majority: u32,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self { passing_gpa: Gpa::PASSING, age_of_majority: 18 }
    }
}

impl QueryConfigBuilder {
    fn validate_fields(&self) -> std::result::Result<(), String> {
        if self.age_of_majority == Some(0) {
            return Err("age_of_majority must be at least 1".to_string());
        }
        Ok(())
    }
}

impl QueryConfig {
    pub fn validate(&self) -> DomainResult<()> {
        if self.age_of_majority == 0 {
            return Err(DomainError::InvalidConfiguration {
                reason: "age_of_majority must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(input).context("parsing query config")?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(input).context("parsing query config")?;
        config.validate()?;
        Ok(config)
    }
}
