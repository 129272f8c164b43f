// Annotations must be string literals; their separators are parsed at runtime

use envtag::Populate;

#[derive(Populate)]
struct Config {
    #[env(42)]
    pub port: u16,
}

fn main() {
    let config = Config { port: 1 };
    println!("{}", config.port);
}
