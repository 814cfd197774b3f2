pub mod error;
pub mod lex;
pub mod parsing;
pub mod syntax;

pub use error::*;
pub use parsing::{parse, parse_line};
pub use syntax::*;
