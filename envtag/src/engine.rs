//! Per-field resolution pipeline.
//!
//! A [`Resolver`] carries one call's parser settings and source. Generated
//! `Populate` impls hand every settable field to it through [`EnvField`],
//! which picks the scalar, sequence or nested path statically.
//!
//! [`EnvField`]: crate::field::EnvField

use crate::coerce::{coerce_list, Coercion, Scalar};
use crate::error::EnvError;
use crate::field::{FieldDescriptor, Populate};
use crate::grammar::keyword;
use crate::names::candidate_names;
use crate::parser::Parser;
use crate::source::{first_non_empty, Source};
use crate::tag::TagOptions;
use crate::validators::Validator;

/// Resolution state for a single top-level call.
pub struct Resolver<'a> {
    parser: &'a Parser,
    source: &'a dyn Source,
}

/// A field's options together with its value after steps 1 to 5
/// (lookup, trim, default, required, case).
struct Resolved {
    options: TagOptions,
    value: String,
}

impl<'a> Resolver<'a> {
    pub fn new(parser: &'a Parser, source: &'a dyn Source) -> Self {
        Self { parser, source }
    }

    /// Record a field that is never touched.
    pub fn skip(&self, field: &FieldDescriptor) -> Result<(), EnvError> {
        tracing::trace!(field = field.name, "skipping field that is not settable");
        Ok(())
    }

    /// Resolve, validate and convert a scalar field.
    pub fn scalar<T: Scalar>(
        &self,
        slot: &mut T,
        field: &FieldDescriptor,
    ) -> Result<(), EnvError> {
        let Some(tag) = field.tag else {
            tracing::trace!(field = field.name, "skipping field without env annotation");
            return Ok(());
        };
        let Resolved { options, value } = self.resolve(field.name, tag)?;

        if let Some(validator) = exclusive_validator(field.name, &options)? {
            if options.has(keyword::REQUIRED) || !value.is_empty() {
                validator
                    .check(&value)
                    .map_err(|reason| EnvError::Validation {
                        field: field.name.to_string(),
                        validator: validator.keyword(),
                        reason,
                    })?;
            }
        }

        if !T::KIND.is_numeric() && (options.has(keyword::MIN) || options.has(keyword::MAX)) {
            tracing::debug!(
                field = field.name,
                kind = ?T::KIND,
                "min/max ignored on non-numeric field"
            );
        }

        *slot = T::coerce(&value, &self.coercion(field.name, &options))?;
        Ok(())
    }

    /// Resolve a list field; a missing value yields an empty list.
    pub fn sequence<T: Scalar>(
        &self,
        slot: &mut Vec<T>,
        field: &FieldDescriptor,
    ) -> Result<(), EnvError> {
        let Some(tag) = field.tag else {
            tracing::trace!(field = field.name, "skipping field without env annotation");
            return Ok(());
        };
        let Resolved { options, value } = self.resolve(field.name, tag)?;

        *slot = coerce_list(
            &value,
            self.parser.list_separator(),
            options.has(keyword::NOTRIM),
            &self.coercion(field.name, &options),
        )?;
        tracing::trace!(field = field.name, items = slot.len(), "resolved list field");
        Ok(())
    }

    /// Recurse into a nested struct, annotated or not.
    pub fn nested<P: Populate>(
        &self,
        slot: &mut P,
        field: &FieldDescriptor,
    ) -> Result<(), EnvError> {
        tracing::trace!(field = field.name, "entering nested struct");
        slot.populate(self)
    }

    fn coercion<'o>(&self, field: &'o str, options: &'o TagOptions) -> Coercion<'o> {
        Coercion {
            field,
            options,
            bool_syntax: self.parser.bool_syntax(),
        }
    }

    fn resolve(&self, field: &str, tag: &str) -> Result<Resolved, EnvError> {
        let options = TagOptions::parse(tag, self.parser.option_separator());
        let names = candidate_names(field, &options, self.parser);

        let mut value = match first_non_empty(self.source, &names) {
            Some((key, value)) => {
                tracing::trace!(field, key, "found environment value");
                value
            }
            None => String::new(),
        };

        if !options.has(keyword::NOTRIM) {
            value = value.trim().to_string();
        }

        // The default is taken verbatim and never trimmed
        if value.is_empty() {
            if let Some(default) = options.get(keyword::DEFAULT) {
                tracing::trace!(field, "using default value");
                value = default.to_string();
            }
        }

        if options.has(keyword::REQUIRED) && value.is_empty() {
            return Err(EnvError::missing(field, names));
        }

        if options.has(keyword::LOWER) {
            value = value.to_lowercase();
        }
        if options.has(keyword::UPPER) {
            value = value.to_uppercase();
        }

        Ok(Resolved { options, value })
    }
}

/// The single `v_*` validator declared in `options`, if any.
fn exclusive_validator(field: &str, options: &TagOptions) -> Result<Option<Validator>, EnvError> {
    let declared: Vec<Validator> = Validator::ALL
        .into_iter()
        .filter(|v| options.has(v.keyword()))
        .collect();

    match declared.as_slice() {
        [] => Ok(None),
        [single] => Ok(Some(*single)),
        _ => Err(EnvError::ExclusiveValidators {
            field: field.to_string(),
            validators: declared.iter().map(|v| v.keyword()).collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn field(name: &'static str, tag: &'static str) -> FieldDescriptor {
        FieldDescriptor {
            name,
            tag: Some(tag),
            settable: true,
        }
    }

    fn env(pairs: &[(&'static str, &'static str)]) -> HashMap<&'static str, &'static str> {
        pairs.iter().copied().collect()
    }

    fn scalar<T: Scalar + Default>(
        parser: &Parser,
        source: &HashMap<&'static str, &'static str>,
        field: FieldDescriptor,
    ) -> Result<T, EnvError> {
        let mut slot = T::default();
        Resolver::new(parser, source).scalar(&mut slot, &field)?;
        Ok(slot)
    }

    #[test]
    fn test_default_when_absent() {
        let port: u16 = scalar(&Parser::new(), &env(&[]), field("port", "default=8080")).unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_empty_first_name_falls_through() {
        let source = env(&[("AWS_DEFAULT_REGION", ""), ("AWS_REGION", "us-east-1")]);
        let region: String = scalar(
            &Parser::new(),
            &source,
            field("region", "name=AWS_DEFAULT_REGION|AWS_REGION,v_aws_region"),
        )
        .unwrap();
        assert_eq!(region, "us-east-1");
    }

    #[test]
    fn test_whitespace_only_value_takes_default() {
        let source = env(&[("HOST", "   ")]);
        let host: String =
            scalar(&Parser::new(), &source, field("host", "name=HOST,default=localhost")).unwrap();
        assert_eq!(host, "localhost");
    }

    #[test]
    fn test_notrim_keeps_whitespace() {
        let source = env(&[("VALUE", "  MyValue  ")]);
        let value: String =
            scalar(&Parser::new(), &source, field("value", "name=VALUE,notrim")).unwrap();
        assert_eq!(value, "  MyValue  ");
    }

    #[test]
    fn test_default_is_not_trimmed() {
        let value: String =
            scalar(&Parser::new(), &env(&[]), field("value", "default= padded ")).unwrap();
        assert_eq!(value, " padded ");
    }

    #[test]
    fn test_required_names_every_candidate() {
        let parser = Parser::new().with_name_prefix("APP_");
        match scalar::<String>(&parser, &env(&[]), field("host", "name=HOST,required")) {
            Err(EnvError::Missing { field, names }) => {
                assert_eq!(field, "host");
                assert_eq!(names, ["APP_HOST", "APP_host"]);
            }
            other => panic!("expected Missing, got {other:?}"),
        }
    }

    #[test]
    fn test_required_satisfied_by_default() {
        let level: String = scalar(
            &Parser::new(),
            &env(&[]),
            field("level", "required,default=info"),
        )
        .unwrap();
        assert_eq!(level, "info");
    }

    #[test]
    fn test_upper_wins_over_lower() {
        let source = env(&[("HOST", "Localhost")]);
        let host: String =
            scalar(&Parser::new(), &source, field("host", "name=HOST,lower,upper")).unwrap();
        assert_eq!(host, "LOCALHOST");
    }

    #[test]
    fn test_case_applies_to_default() {
        let level: String =
            scalar(&Parser::new(), &env(&[]), field("level", "lower,default=INFO")).unwrap();
        assert_eq!(level, "info");
    }

    #[test]
    fn test_exclusive_validators_rejected_regardless_of_value() {
        let tag = "v_aws_bucket_name,v_aws_region,default=my-default-bucket";
        match scalar::<String>(&Parser::new(), &env(&[]), field("bucket", tag)) {
            Err(EnvError::ExclusiveValidators { validators, .. }) => {
                assert_eq!(validators, ["v_aws_region", "v_aws_bucket_name"]);
            }
            other => panic!("expected ExclusiveValidators, got {other:?}"),
        }
        // Also with nothing resolved at all
        let result = scalar::<String>(
            &Parser::new(),
            &env(&[]),
            field("b", "v_aws_region,v_aws_account_id"),
        );
        assert!(matches!(result, Err(EnvError::ExclusiveValidators { .. })));
    }

    #[test]
    fn test_optional_empty_value_skips_validation() {
        let bucket: String =
            scalar(&Parser::new(), &env(&[]), field("bucket", "v_aws_bucket_name")).unwrap();
        assert_eq!(bucket, "");
    }

    #[test]
    fn test_required_empty_value_fails_before_validation() {
        let result = scalar::<String>(
            &Parser::new(),
            &env(&[]),
            field("bucket", "required,v_aws_bucket_name"),
        );
        assert!(matches!(result, Err(EnvError::Missing { .. })));
    }

    #[test]
    fn test_validator_failure() {
        let source = env(&[("ACCOUNT", "1234")]);
        let tag = "name=ACCOUNT,v_aws_account_id";
        match scalar::<String>(&Parser::new(), &source, field("account", tag)) {
            Err(EnvError::Validation { validator, .. }) => {
                assert_eq!(validator, "v_aws_account_id");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_validator_sees_cased_value() {
        let source = env(&[("REGION", "US-EAST-1")]);
        let tag = "name=REGION,lower,v_aws_region";
        let region: String = scalar(&Parser::new(), &source, field("region", tag)).unwrap();
        assert_eq!(region, "us-east-1");
    }

    #[test]
    fn test_sequence_from_default_and_env() {
        let parser = Parser::new();
        let resolver_env = env(&[("TARGET_HOSTS", "host1|host2|host3")]);
        let mut hosts: Vec<String> = Vec::new();
        Resolver::new(&parser, &resolver_env)
            .sequence(&mut hosts, &field("hosts", "name=hostslist|TARGET_HOSTS,default=localhost"))
            .unwrap();
        assert_eq!(hosts, ["host1", "host2", "host3"]);

        let empty = env(&[]);
        Resolver::new(&parser, &empty)
            .sequence(&mut hosts, &field("hosts", "default=localhost|127.0.0.1"))
            .unwrap();
        assert_eq!(hosts, ["localhost", "127.0.0.1"]);
    }

    #[test]
    fn test_sequence_missing_is_empty() {
        let parser = Parser::new();
        let source = env(&[("IDS", "|||")]);
        let mut ids: Vec<u32> = vec![1, 2];
        Resolver::new(&parser, &source)
            .sequence(&mut ids, &field("ids", "name=IDS"))
            .unwrap();
        assert!(ids.is_empty());
    }

    #[test]
    fn test_required_sequence_missing() {
        let parser = Parser::new();
        let empty = env(&[]);
        let mut hosts: Vec<String> = vec!["keep".to_string()];
        let result = Resolver::new(&parser, &empty)
            .sequence(&mut hosts, &field("hosts", "name=HOSTS,required"));
        match result {
            Err(EnvError::Missing { field, names }) => {
                assert_eq!(field, "hosts");
                assert_eq!(names, ["HOSTS", "hosts"]);
            }
            other => panic!("expected Missing, got {other:?}"),
        }
        assert_eq!(hosts, ["keep"]);
    }

    #[test]
    fn test_required_sequence_all_empty_items_ok() {
        let parser = Parser::new();
        let source = env(&[("HOSTS", "|||")]);
        let mut hosts: Vec<String> = vec!["keep".to_string()];
        Resolver::new(&parser, &source)
            .sequence(&mut hosts, &field("hosts", "name=HOSTS,required"))
            .unwrap();
        assert!(hosts.is_empty());
    }

    #[test]
    fn test_notrim_whitespace_blocks_default() {
        let source = env(&[("N", "  ")]);
        let value: String =
            scalar(&Parser::new(), &source, field("n", "name=N,notrim,default=dflt")).unwrap();
        assert_eq!(value, "  ");
    }

    #[test]
    fn test_sequence_ignores_validators() {
        let parser = Parser::new();
        let source = env(&[("REGIONS", "not a region")]);
        let mut regions: Vec<String> = Vec::new();
        Resolver::new(&parser, &source)
            .sequence(&mut regions, &field("regions", "name=REGIONS,v_aws_region,v_aws_account_id"))
            .unwrap();
        assert_eq!(regions, ["not a region"]);
    }

    #[test]
    fn test_sequence_uppercases_before_split() {
        let parser = Parser::new().with_list_separator("/").unwrap().with_name_prefix("MYAPP_");
        let source = env(&[("MYAPP_MODES", "dev/Staging/prOd")]);
        let mut modes: Vec<String> = Vec::new();
        Resolver::new(&parser, &source)
            .sequence(&mut modes, &field("modes", "upper"))
            .unwrap();
        assert_eq!(modes, ["DEV", "STAGING", "PROD"]);
    }

    #[test]
    fn test_unannotated_field_untouched() {
        let parser = Parser::new();
        let source = env(&[("NAME", "value")]);
        let mut name = "keep".to_string();
        let descriptor = FieldDescriptor {
            name: "name",
            tag: None,
            settable: true,
        };
        Resolver::new(&parser, &source).scalar(&mut name, &descriptor).unwrap();
        assert_eq!(name, "keep");
    }

    #[test]
    fn test_empty_optional_number_is_an_error() {
        let result = scalar::<i32>(&Parser::new(), &env(&[]), field("timeout", ""));
        assert!(matches!(result, Err(EnvError::InvalidNumber { .. })));
    }
}
