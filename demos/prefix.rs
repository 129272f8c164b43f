//! Name prefix applied to every candidate variable

use envtag::{Parser, Populate};

#[derive(Debug, Default, Populate)]
struct Config {
    #[env("required")]
    pub database_url: String, // DEMO_database_url or DEMO_DATABASE_URL

    #[env("name=LISTEN_PORT,default=8080")]
    pub port: u16, // DEMO_LISTEN_PORT first
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    std::env::set_var("DEMO_DATABASE_URL", "postgres://localhost/db");
    std::env::set_var("DEMO_LISTEN_PORT", "9090");

    let parser = Parser::new().with_name_prefix("DEMO_");
    let mut config = Config::default();
    parser.unmarshal(&mut config)?;

    println!("Prefixed configuration:");
    println!("  Database URL: {}", config.database_url);
    println!("  Port: {}", config.port);

    std::env::remove_var("DEMO_DATABASE_URL");
    std::env::remove_var("DEMO_LISTEN_PORT");

    Ok(())
}
