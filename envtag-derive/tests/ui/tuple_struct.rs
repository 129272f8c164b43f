// Tuple structs have no field names to derive lookup keys from

use envtag::Populate;

#[derive(Populate)]
struct Config(pub String);

fn main() {
    let config = Config(String::new());
    println!("{}", config.0);
}
