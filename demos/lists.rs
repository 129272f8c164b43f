//! List fields split on the list separator

use envtag::Populate;

#[derive(Debug, Default, Populate)]
struct Config {
    #[env("default=localhost|127.0.0.1")]
    pub hosts: Vec<String>,

    #[env("name=PORTS,min=1,max=65535")]
    pub ports: Vec<u16>,

    #[env("name=WEIGHTS")]
    pub weights: Vec<f64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Blank items are dropped after trimming
    std::env::set_var("PORTS", "80 | 443 ||8080|");
    std::env::remove_var("WEIGHTS");

    let config = Config::from_env()?;

    println!("List configuration:");
    println!("  Hosts (default): {:?}", config.hosts);
    println!("  Ports: {:?}", config.ports);
    println!("  Weights (unset): {:?}", config.weights);

    std::env::remove_var("PORTS");

    Ok(())
}
