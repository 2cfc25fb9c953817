//! Lexical scanner for Sara, a small imperative toy language.

pub mod common;
pub mod error;
pub mod scanner;

pub use error::{SaraError, SaraResult};
pub use scanner::source::{CharSource, SourceText};
pub use scanner::token::{Tag, Token, Type, Word};
pub use scanner::words::ReservedWords;
pub use scanner::Scanner;
