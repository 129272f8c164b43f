//! Parser settings and the population entry points

use serde::{Deserialize, Serialize};

use crate::coerce::BoolSyntax;
use crate::engine::Resolver;
use crate::error::EnvError;
use crate::field::Populate;
use crate::grammar::{DEFAULT_LIST_SEPARATOR, DEFAULT_OPTION_SEPARATOR};
use crate::source::{ProcessEnv, Source};

/// Configurable environment parser.
///
/// The option separator and the list separator must always differ; setters
/// that would break this return [`EnvError::SeparatorConflict`].
///
/// ```rust
/// use envtag::Parser;
///
/// # fn main() -> anyhow::Result<()> {
/// let parser = Parser::new()
///     .with_list_separator(";")?
///     .with_name_prefix("APP_");
/// assert_eq!(parser.list_separator(), ";");
/// assert!(Parser::new().with_option_separator("|").is_err());
/// #     Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parser {
    option_separator: String,
    list_separator: String,
    name_prefix: String,
    bool_syntax: BoolSyntax,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Parser with `,` between options, `|` between list items and no prefix.
    pub fn new() -> Self {
        Self {
            option_separator: DEFAULT_OPTION_SEPARATOR.to_string(),
            list_separator: DEFAULT_LIST_SEPARATOR.to_string(),
            name_prefix: String::new(),
            bool_syntax: BoolSyntax::default(),
        }
    }

    /// Set the separator between options of an annotation.
    pub fn with_option_separator(mut self, separator: impl Into<String>) -> Result<Self, EnvError> {
        let separator = separator.into();
        check_separators(&separator, &self.list_separator)?;
        self.option_separator = separator;
        Ok(self)
    }

    /// Set the separator between list items, in values and in `name=`.
    pub fn with_list_separator(mut self, separator: impl Into<String>) -> Result<Self, EnvError> {
        let separator = separator.into();
        check_separators(&self.option_separator, &separator)?;
        self.list_separator = separator;
        Ok(self)
    }

    /// Prefix prepended to every candidate name, explicit `name=` entries included.
    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }

    pub fn with_bool_syntax(mut self, syntax: BoolSyntax) -> Self {
        self.bool_syntax = syntax;
        self
    }

    pub fn option_separator(&self) -> &str {
        &self.option_separator
    }

    pub fn list_separator(&self) -> &str {
        &self.list_separator
    }

    pub fn name_prefix(&self) -> &str {
        &self.name_prefix
    }

    pub fn bool_syntax(&self) -> BoolSyntax {
        self.bool_syntax
    }

    /// Populate `target` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns the first error hit while resolving fields in declaration
    /// order. Fields resolved before the failing one keep their new values.
    pub fn unmarshal<T: Populate>(&self, target: &mut T) -> Result<(), EnvError> {
        self.unmarshal_from(target, &ProcessEnv)
    }

    /// Populate `target` from an arbitrary key/value source.
    pub fn unmarshal_from<T: Populate, S: Source>(
        &self,
        target: &mut T,
        source: &S,
    ) -> Result<(), EnvError> {
        tracing::debug!(
            target_type = std::any::type_name::<T>(),
            fields = T::FIELDS.len(),
            prefix = %self.name_prefix,
            "populating struct from environment"
        );
        target.populate(&Resolver::new(self, source))
    }
}

fn check_separators(option: &str, list: &str) -> Result<(), EnvError> {
    if option.is_empty() || list.is_empty() {
        return Err(EnvError::EmptySeparator);
    }
    if option == list {
        return Err(EnvError::SeparatorConflict {
            separator: option.to_string(),
        });
    }
    Ok(())
}

/// Serializable form of the [`Parser`] settings, for embedding in a host
/// application's own configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserConfig {
    pub option_separator: String,
    pub list_separator: String,
    pub name_prefix: String,
    pub bool_syntax: BoolSyntax,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig::from(&Parser::new())
    }
}

impl From<&Parser> for ParserConfig {
    fn from(parser: &Parser) -> Self {
        Self {
            option_separator: parser.option_separator.clone(),
            list_separator: parser.list_separator.clone(),
            name_prefix: parser.name_prefix.clone(),
            bool_syntax: parser.bool_syntax,
        }
    }
}

impl TryFrom<ParserConfig> for Parser {
    type Error = EnvError;

    fn try_from(config: ParserConfig) -> Result<Self, Self::Error> {
        check_separators(&config.option_separator, &config.list_separator)?;
        Ok(Self {
            option_separator: config.option_separator,
            list_separator: config.list_separator,
            name_prefix: config.name_prefix,
            bool_syntax: config.bool_syntax,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let parser = Parser::default();
        assert_eq!(parser.option_separator(), ",");
        assert_eq!(parser.list_separator(), "|");
        assert_eq!(parser.name_prefix(), "");
        assert_eq!(parser.bool_syntax(), BoolSyntax::Strict);
    }

    #[test]
    fn test_option_separator_conflict() {
        let result = Parser::new().with_option_separator("|");
        assert!(matches!(
            result,
            Err(EnvError::SeparatorConflict { separator }) if separator == "|"
        ));
    }

    #[test]
    fn test_list_separator_conflict() {
        let result = Parser::new().with_list_separator(",");
        assert!(matches!(result, Err(EnvError::SeparatorConflict { .. })));
    }

    #[test]
    fn test_swapping_separators_in_order() {
        let parser = Parser::new()
            .with_option_separator(";")
            .unwrap()
            .with_list_separator(",")
            .unwrap();
        assert_eq!(parser.option_separator(), ";");
        assert_eq!(parser.list_separator(), ",");
    }

    #[test]
    fn test_empty_separator_rejected() {
        assert!(matches!(
            Parser::new().with_list_separator(""),
            Err(EnvError::EmptySeparator)
        ));
    }

    #[test]
    fn test_config_from_json() {
        let config: ParserConfig = serde_json::from_str(
            r#"{"option_separator": "|", "list_separator": ",", "bool_syntax": "extended"}"#,
        )
        .unwrap();
        let parser = Parser::try_from(config).unwrap();
        assert_eq!(parser.option_separator(), "|");
        assert_eq!(parser.list_separator(), ",");
        assert_eq!(parser.name_prefix(), "");
        assert_eq!(parser.bool_syntax(), BoolSyntax::Extended);
    }

    #[test]
    fn test_config_conflict_rejected() {
        let config: ParserConfig =
            serde_json::from_str(r#"{"option_separator": "|"}"#).unwrap();
        assert!(Parser::try_from(config).is_err());
    }

    #[test]
    fn test_config_round_trip_through_parser() {
        let parser = Parser::new().with_name_prefix("APP_");
        let config = ParserConfig::from(&parser);
        assert_eq!(Parser::try_from(config).unwrap(), parser);
    }
}
