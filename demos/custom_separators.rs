//! Custom option and list separators, loaded from a JSON settings block

use envtag::{Parser, ParserConfig, Populate};
use std::collections::HashMap;

#[derive(Debug, Default, Populate)]
struct Config {
    // ';' between options frees ',' for list items
    #[env("name=SERVERS;default=a.example.com,b.example.com")]
    pub servers: Vec<String>,

    #[env("name=VERBOSE;default=off")]
    pub verbose: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let settings: ParserConfig = serde_json::from_str(
        r#"{ "option_separator": ";", "list_separator": ",", "bool_syntax": "extended" }"#,
    )?;
    let parser = Parser::try_from(settings)?;

    // Any key/value source works, not only the process environment
    let source = HashMap::from([("VERBOSE", "yes")]);
    let mut config = Config::default();
    parser.unmarshal_from(&mut config, &source)?;

    println!("Servers: {:?}", config.servers);
    println!("Verbose: {}", config.verbose);

    // Equal separators are refused up front
    if let Err(e) = Parser::new().with_list_separator(",") {
        println!("Rejected parser: {e}");
    }

    Ok(())
}
