//! AWS format validators and fallback variable names

use envtag::Populate;

#[derive(Debug, Default, Populate)]
struct AwsConfig {
    // Tries AWS_DEFAULT_REGION first, then AWS_REGION
    #[env("name=AWS_DEFAULT_REGION|AWS_REGION,v_aws_region,required")]
    pub region: String,

    #[env("name=AWS_ACCOUNT_ID,v_aws_account_id,required")]
    pub account_id: String,

    // Optional: an empty value is not validated
    #[env("name=AWS_ROLE_ARN,v_aws_role_arn")]
    pub role_arn: String,

    #[env("name=AWS_BUCKET,v_aws_bucket_name")]
    pub bucket: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    std::env::set_var("AWS_REGION", "us-west-2");
    std::env::set_var("AWS_ACCOUNT_ID", "123456789012");
    std::env::set_var("AWS_BUCKET", "my-s3-bucket");

    let config = AwsConfig::from_env()?;
    println!("AWS configuration: {config:#?}");

    // A malformed bucket name is rejected with the validator's reason
    std::env::set_var("AWS_BUCKET", "My..Bucket");
    match AwsConfig::from_env() {
        Ok(_) => println!("unexpectedly accepted"),
        Err(e) => println!("Rejected: {e}"),
    }

    for key in ["AWS_REGION", "AWS_ACCOUNT_ID", "AWS_BUCKET"] {
        std::env::remove_var(key);
    }

    Ok(())
}
