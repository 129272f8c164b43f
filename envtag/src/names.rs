//! Candidate environment variable names for a field.

use crate::grammar::keyword;
use crate::parser::Parser;
use crate::tag::TagOptions;

/// Build the ordered lookup keys for `field`.
///
/// Order: every entry of the `name` option (split by the list separator),
/// then the declared name as-is, upper-cased and lower-cased. Each key gets
/// the parser's name prefix; duplicates after prefixing are dropped keeping
/// the first occurrence.
pub fn candidate_names(field: &str, options: &TagOptions, parser: &Parser) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    let mut push = |name: &str| {
        let key = format!("{}{}", parser.name_prefix(), name);
        if !names.contains(&key) {
            names.push(key);
        }
    };

    if let Some(listed) = options.get(keyword::NAME) {
        listed
            .split(parser.list_separator())
            .filter(|name| !name.is_empty())
            .for_each(&mut push);
    }

    push(field);
    push(&field.to_uppercase());
    push(&field.to_lowercase());

    names
}
