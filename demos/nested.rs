//! Nested structs are always recursed into

use envtag::Populate;

#[derive(Debug, Default, Populate)]
struct Database {
    #[env("name=DB_HOST,default=localhost")]
    pub host: String,

    #[env("name=DB_PORT,default=5432")]
    pub port: u16,

    // Not pub: never populated
    #[env("name=DB_PASSWORD")]
    password: String,
}

impl Database {
    fn has_password(&self) -> bool {
        !self.password.is_empty()
    }
}

#[derive(Debug, Default, Populate)]
struct Config {
    #[env("name=APP_NAME,default=demo")]
    pub name: String,

    // No annotation needed for nested structs
    pub database: Database,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    std::env::set_var("DB_HOST", "db.internal");
    std::env::set_var("DB_PASSWORD", "ignored");

    let config = Config::from_env()?;

    println!("Nested configuration:");
    println!("  Name: {}", config.name);
    println!("  Database host: {}", config.database.host);
    println!("  Database port: {}", config.database.port);
    println!("  Password populated: {}", config.database.has_password());

    std::env::remove_var("DB_HOST");
    std::env::remove_var("DB_PASSWORD");

    Ok(())
}
