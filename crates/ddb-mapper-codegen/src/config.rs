//! Generation options
//!
//! Options are plain serde data so they can be read from the `[codegen]` table
//! of `ddb-mapper.toml`, from CLI flags, or from derive container attributes.
//! Every enum parses case-insensitively through [`FromStr`], so `"ALWAYS"`
//! and `"always"` are the same value.

use crate::declaration::SourceVisibility;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An option value could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid value `{value}` for {option}, expected {expected}")]
pub struct OptionParseError {
    pub option: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl OptionParseError {
    fn new(option: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            option,
            value: value.to_string(),
            expected,
        }
    }
}

/// When to emit a builder for a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GenerateBuilderClasses {
    /// Only when the record cannot be built from `Default` plus field assignment.
    #[default]
    WhenRequired,
    Always,
}

impl FromStr for GenerateBuilderClasses {
    type Err = OptionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "whenrequired" => Ok(Self::WhenRequired),
            "always" => Ok(Self::Always),
            _ => Err(OptionParseError::new(
                "generate_builder_classes",
                s,
                "`when_required` or `always`",
            )),
        }
    }
}

impl fmt::Display for GenerateBuilderClasses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WhenRequired => write!(f, "when_required"),
            Self::Always => write!(f, "always"),
        }
    }
}

/// Visibility of generated items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Visibility {
    /// Same visibility as the record.
    #[default]
    Implicit,
    Public,
    /// `pub(crate)`
    Internal,
}

impl Visibility {
    /// The modifier for generated items, with a trailing space when non-empty.
    pub fn modifier(&self, record: &SourceVisibility) -> String {
        match self {
            Visibility::Implicit => record.modifier(),
            Visibility::Public => "pub ".to_string(),
            Visibility::Internal => "pub(crate) ".to_string(),
        }
    }
}

impl FromStr for Visibility {
    type Err = OptionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "implicit" => Ok(Self::Implicit),
            "public" | "pub" => Ok(Self::Public),
            "internal" | "crate" => Ok(Self::Internal),
            _ => Err(OptionParseError::new(
                "visibility",
                s,
                "`implicit`, `public` or `internal`",
            )),
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Implicit => write!(f, "implicit"),
            Self::Public => write!(f, "public"),
            Self::Internal => write!(f, "internal"),
        }
    }
}

/// Module that generated files are placed in.
///
/// Spelled `relative:<suffix>` or `absolute:<path>` in configuration. A bare
/// `relative` uses the default suffix, and a bare path rooted at `crate` is
/// absolute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DestinationPackage {
    /// Appended to the record's own module.
    Relative(String),
    Absolute(String),
}

impl DestinationPackage {
    pub const DEFAULT_SUFFIX: &'static str = "mapper::schemas";

    /// The destination module for a record declared in `namespace`.
    pub fn resolve(&self, namespace: &str) -> String {
        match self {
            DestinationPackage::Relative(suffix) if namespace.is_empty() => suffix.clone(),
            DestinationPackage::Relative(suffix) if suffix.is_empty() => namespace.to_string(),
            DestinationPackage::Relative(suffix) => format!("{namespace}::{suffix}"),
            DestinationPackage::Absolute(path) => path.clone(),
        }
    }
}

impl Default for DestinationPackage {
    fn default() -> Self {
        DestinationPackage::Relative(Self::DEFAULT_SUFFIX.to_string())
    }
}

impl FromStr for DestinationPackage {
    type Err = OptionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (kind, path) = match s.split_once(':') {
            Some((kind, rest)) if !rest.starts_with(':') && !kind.contains("::") => {
                (kind.trim().to_ascii_lowercase(), Some(rest.trim()))
            }
            _ => (s.to_ascii_lowercase(), None),
        };

        match (kind.as_str(), path) {
            ("relative", None) => Ok(Self::default()),
            ("relative", Some(suffix)) => Ok(Self::Relative(suffix.to_string())),
            ("absolute", Some(path)) if !path.is_empty() => Ok(Self::Absolute(path.to_string())),
            _ if path.is_none() && (s == "crate" || s.starts_with("crate::")) => {
                Ok(Self::Absolute(s.to_string()))
            }
            _ => Err(OptionParseError::new(
                "destination_package",
                s,
                "`relative[:suffix]` or `absolute:path`",
            )),
        }
    }
}

impl fmt::Display for DestinationPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DestinationPackage::Relative(suffix) => write!(f, "relative:{suffix}"),
            DestinationPackage::Absolute(path) => write!(f, "absolute:{path}"),
        }
    }
}

/// Options controlling a generation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodegenOptions {
    pub generate_builder_classes: GenerateBuilderClasses,
    pub visibility: Visibility,
    pub destination_package: DestinationPackage,

    /// Emit the `Mapper` extension trait with a typed table accessor.
    pub generate_get_table_extension: bool,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            generate_builder_classes: GenerateBuilderClasses::default(),
            visibility: Visibility::default(),
            destination_package: DestinationPackage::default(),
            generate_get_table_extension: true,
        }
    }
}

impl CodegenOptions {
    pub fn always_generate_builders(&self) -> bool {
        self.generate_builder_classes == GenerateBuilderClasses::Always
    }
}

/// Lowercase and drop word separators, so `WHEN_REQUIRED` matches `whenRequired`.
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

macro_rules! string_conversions {
    ($($ty:ty),*) => {$(
        impl TryFrom<String> for $ty {
            type Error = OptionParseError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> String {
                value.to_string()
            }
        }
    )*};
}

string_conversions!(GenerateBuilderClasses, Visibility, DestinationPackage);


#[cfg(test)]
#[path = "config/config_parameterized_tests.rs"]
mod config_parameterized_tests;
