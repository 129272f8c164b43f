//! Format checks selected with `v_*` options.
//!
//! The checks are mutually exclusive per field; the engine enforces that,
//! the validators themselves only judge a single string.

use std::sync::LazyLock;

use regex::Regex;

use crate::grammar::keyword;

// e.g. us-east-1
static AWS_REGION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2}-[a-z-]+-[0-9]+$").expect("valid regex"));

static AWS_ACCOUNT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{12}$").expect("valid regex"));

static AWS_BUCKET_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9.-]{3,63}$").expect("valid regex"));

// e.g. arn:aws:iam::123456789012:role/MyRole
static AWS_ROLE_ARN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^arn:aws:iam::[0-9]{12}:role/[A-Za-z0-9_+=,.@-]{1,64}$").expect("valid regex")
});

/// A named string-format check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    AwsRegion,
    AwsAccountId,
    AwsBucketName,
    AwsRoleArn,
}

impl Validator {
    /// All validators, in the order they are reported in errors.
    pub const ALL: [Validator; 4] = [
        Validator::AwsRegion,
        Validator::AwsAccountId,
        Validator::AwsRoleArn,
        Validator::AwsBucketName,
    ];

    /// The annotation keyword that selects this validator
    pub fn keyword(self) -> &'static str {
        match self {
            Validator::AwsRegion => keyword::V_AWS_REGION,
            Validator::AwsAccountId => keyword::V_AWS_ACCOUNT_ID,
            Validator::AwsBucketName => keyword::V_AWS_BUCKET_NAME,
            Validator::AwsRoleArn => keyword::V_AWS_ROLE_ARN,
        }
    }

    /// Check `value`, returning a human-readable reason on failure.
    pub fn check(self, value: &str) -> Result<(), String> {
        match self {
            Validator::AwsRegion => aws_region(value),
            Validator::AwsAccountId => aws_account_id(value),
            Validator::AwsBucketName => aws_bucket_name(value),
            Validator::AwsRoleArn => aws_role_arn(value),
        }
    }
}

fn aws_region(region: &str) -> Result<(), String> {
    if AWS_REGION.is_match(region) {
        Ok(())
    } else {
        Err(format!(
            "invalid AWS region name '{region}', expected format xx-xxxx-0"
        ))
    }
}

fn aws_account_id(id: &str) -> Result<(), String> {
    if AWS_ACCOUNT_ID.is_match(id) {
        Ok(())
    } else {
        Err(format!("invalid AWS account ID '{id}', must be a 12-digit number"))
    }
}

/// 3 to 63 lowercase letters, digits, hyphens and periods; no leading or
/// trailing period or hyphen; no consecutive periods.
fn aws_bucket_name(name: &str) -> Result<(), String> {
    if !AWS_BUCKET_NAME.is_match(name) {
        return Err(format!(
            "invalid AWS bucket name '{name}', must be 3 to 63 characters of lowercase letters, digits, hyphens and periods"
        ));
    }

    let edges = ['.', '-'];
    if name.starts_with(edges) || name.ends_with(edges) {
        return Err(format!(
            "invalid AWS bucket name '{name}', must not start or end with a period or hyphen"
        ));
    }

    if name.contains("..") {
        return Err(format!(
            "invalid AWS bucket name '{name}', must not contain consecutive periods"
        ));
    }

    Ok(())
}

fn aws_role_arn(arn: &str) -> Result<(), String> {
    if AWS_ROLE_ARN.is_match(arn) {
        Ok(())
    } else {
        Err(format!(
            "invalid AWS role ARN '{arn}', expected arn:aws:iam::<account-id>:role/<role-name>"
        ))
    }
}
