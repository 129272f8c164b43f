//! Populate structs from environment variables with compact tag annotations
//!
//! `envtag` reads a field's value through an ordered chain of candidate
//! variable names, applies default, required, trim and case rules, checks
//! optional format validators and converts the result into the field's type.
//!
//! # Features
//!
//! - **Declarative**: one `#[env("...")]` string per field, `#[derive(Populate)]` per struct
//! - **Fallback names**: `name=AWS_DEFAULT_REGION|AWS_REGION`, then the field name in three casings
//! - **Lists**: `Vec<T>` fields split on a configurable separator
//! - **Nested structs**: always recursed into, annotated or not
//! - **Validation**: inclusive `min`/`max` and `v_aws_*` format checks
//!
//! # Example
//!
//! ```rust
//! use envtag::Populate;
//!
//! #[derive(Debug, Default, Populate)]
//! struct Config {
//!     #[env("name=LOG_LEVEL,lower,default=info")]
//!     pub log_level: String,
//!
//!     #[env("name=PORT,min=1024,max=65535,default=8080")]
//!     pub port: u16,
//!
//!     #[env("name=HOSTS,default=localhost|127.0.0.1")]
//!     pub hosts: Vec<String>,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! #     std::env::set_var("LOG_LEVEL", "DEBUG");
//! #     std::env::remove_var("PORT");
//! #     std::env::remove_var("HOSTS");
//! let config = Config::from_env()?;
//! assert_eq!(config.log_level, "debug");
//! assert_eq!(config.port, 8080);
//! assert_eq!(config.hosts, ["localhost", "127.0.0.1"]);
//! #     Ok(())
//! # }
//! ```
//!
//! # Annotation options
//!
//! | Option | Effect |
//! |---|---|
//! | `name=A\|B` | Look up `A`, then `B`, before the field name |
//! | `default=D` | Used verbatim when no non-empty value is found |
//! | `required` | Fail when the value is still empty after defaulting |
//! | `notrim` | Keep surrounding whitespace |
//! | `lower` / `upper` | Change case; `upper` wins when both are set |
//! | `min=X` / `max=Y` | Inclusive numeric bounds |
//! | `v_aws_region`, `v_aws_account_id`, `v_aws_role_arn`, `v_aws_bucket_name` | Format check, at most one per field |
//!
//! Fields without `#[env]` are left alone unless they are nested structs.
//! Non-`pub` fields are never touched. Use `#[env(skip)]` for public fields
//! whose type is neither a scalar, a `Vec` of scalars nor a `Populate` struct.
//!
//! # Parser settings
//!
//! ```rust
//! use envtag::{Parser, Populate};
//! use std::collections::HashMap;
//!
//! #[derive(Debug, Default, Populate)]
//! struct Config {
//!     #[env("upper")]
//!     pub modes: Vec<String>,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! let parser = Parser::new()
//!     .with_list_separator("/")?
//!     .with_name_prefix("MYAPP_");
//!
//! let source = HashMap::from([("MYAPP_MODES", "dev/Staging/prOd")]);
//! let mut config = Config::default();
//! parser.unmarshal_from(&mut config, &source)?;
//! assert_eq!(config.modes, ["DEV", "STAGING", "PROD"]);
//! #     Ok(())
//! # }
//! ```

pub mod coerce;
pub mod engine;
pub mod field;
pub mod grammar;
pub mod names;
pub mod parser;
pub mod source;
pub mod tag;
pub mod validators;

mod error;

pub use coerce::{BoolSyntax, Scalar, ValueKind};
pub use engine::Resolver;
pub use envtag_derive::Populate;
pub use error::{Bound, EnvError};
pub use field::{EnvField, FieldDescriptor, Populate};
pub use parser::{Parser, ParserConfig};
pub use source::{ProcessEnv, Source};

/// Populate `target` from the process environment with a default [`Parser`].
pub fn unmarshal<T: Populate>(target: &mut T) -> Result<(), EnvError> {
    Parser::new().unmarshal(target)
}
