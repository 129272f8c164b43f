//! Basic usage of envtag

use envtag::Populate;

#[derive(Debug, Default, Populate)]
struct Config {
    // No annotation: ignored
    pub no_env_tag: String,

    // Trimming disabled and forced to uppercase
    #[env("notrim,required,upper")]
    pub my_value: String,

    #[env("name=LOG_LEVEL,lower,default=info")]
    pub log_level: String,

    #[env("name=PORT,min=1024,max=65534,default=8080")]
    pub port: i32,

    #[env("required")]
    pub timeout: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    std::env::set_var("MY_VALUE", "  MyValue  ");
    std::env::set_var("LOG_LEVEL", "DEBUG");
    std::env::set_var("TIMEOUT", "30");

    let config = Config::from_env()?;

    println!("Configuration loaded:");
    println!("  No env tag: {:?}", config.no_env_tag);
    println!("  My value: {:?}", config.my_value);
    println!("  Log level: {}", config.log_level);
    println!("  Port: {}", config.port);
    println!("  Timeout: {}", config.timeout);

    std::env::remove_var("MY_VALUE");
    std::env::remove_var("LOG_LEVEL");
    std::env::remove_var("TIMEOUT");

    Ok(())
}
