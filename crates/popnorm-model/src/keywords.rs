//! Ranked keyword sets used to recognise column roles.
//!
//! Each role has a list of candidate keywords in priority order. A column
//! matches a keyword when its lowercased name contains the lowercased
//! keyword. Resolution tries the first keyword against every column before
//! moving to the next keyword, so the earliest keyword wins over the most
//! specific one.
//!
//! Keyword sets can be overridden from a TOML file:
//!
//! ```toml
//! region = ["district", "region"]
//! age = ["age"]
//! population = ["population", "count"]
//! ```
//!
//! Roles omitted from the file keep their defaults.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

const DEFAULT_REGION: &[&str] = &[
    "행정구", "행정구역", "지역", "시군구", "구", "행정동", "area", "region",
];
const DEFAULT_AGE: &[&str] = &["연령", "나이", "age"];
const DEFAULT_POPULATION: &[&str] = &["인구", "population", "pop", "인구수"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    Region,
    Age,
    Population,
}

impl ColumnRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Region => "region",
            Self::Age => "age",
            Self::Population => "population",
        }
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordSets {
    pub region: Vec<String>,
    pub age: Vec<String>,
    pub population: Vec<String>,
}

impl Default for KeywordSets {
    fn default() -> Self {
        Self {
            region: owned(DEFAULT_REGION),
            age: owned(DEFAULT_AGE),
            population: owned(DEFAULT_POPULATION),
        }
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

impl KeywordSets {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let sets: Self = toml::from_str(source)?;
        sets.validate()?;
        Ok(sets)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| ModelError::KeywordIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Rejects blank keywords; an empty needle would match every column.
    pub fn validate(&self) -> Result<()> {
        for role in [ColumnRole::Region, ColumnRole::Age, ColumnRole::Population] {
            if self.for_role(role).iter().any(|kw| kw.trim().is_empty()) {
                return Err(ModelError::EmptyKeyword {
                    role: role.as_str(),
                });
            }
        }
        Ok(())
    }

    pub fn for_role(&self, role: ColumnRole) -> &[String] {
        match role {
            ColumnRole::Region => &self.region,
            ColumnRole::Age => &self.age,
            ColumnRole::Population => &self.population,
        }
    }

    #[must_use]
    pub fn with_region(mut self, keywords: Vec<String>) -> Self {
        self.region = keywords;
        self
    }

    #[must_use]
    pub fn with_age(mut self, keywords: Vec<String>) -> Self {
        self.age = keywords;
        self
    }

    #[must_use]
    pub fn with_population(mut self, keywords: Vec<String>) -> Self {
        self.population = keywords;
        self
    }
}
