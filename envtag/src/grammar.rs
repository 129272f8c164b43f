//! Keywords and delimiters of the `#[env("...")]` annotation language.

/// Default separator between options in an annotation (`name=A,required`)
pub const DEFAULT_OPTION_SEPARATOR: &str = ",";

/// Default separator between items of a list (`name=A|B`, `a|b|c`)
pub const DEFAULT_LIST_SEPARATOR: &str = "|";

/// Recognised option keywords.
pub mod keyword {
    pub const NAME: &str = "name";
    pub const REQUIRED: &str = "required";
    pub const DEFAULT: &str = "default";
    pub const NOTRIM: &str = "notrim";
    pub const LOWER: &str = "lower";
    pub const UPPER: &str = "upper";
    pub const MIN: &str = "min";
    pub const MAX: &str = "max";

    pub const V_AWS_REGION: &str = "v_aws_region";
    pub const V_AWS_ACCOUNT_ID: &str = "v_aws_account_id";
    pub const V_AWS_ROLE_ARN: &str = "v_aws_role_arn";
    pub const V_AWS_BUCKET_NAME: &str = "v_aws_bucket_name";

    /// Every keyword the engine acts on.
    pub const ALL: &[&str] = &[
        NAME,
        REQUIRED,
        DEFAULT,
        NOTRIM,
        LOWER,
        UPPER,
        MIN,
        MAX,
        V_AWS_REGION,
        V_AWS_ACCOUNT_ID,
        V_AWS_ROLE_ARN,
        V_AWS_BUCKET_NAME,
    ];

    /// Whether `key` is one of the recognised keywords
    pub fn is_known(key: &str) -> bool {
        ALL.contains(&key)
    }
}
