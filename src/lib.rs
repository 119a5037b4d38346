pub mod args;
pub mod lex;

pub use self::args::Args;
pub use self::lex::{lookup_identifier, Lexer, Span, Token, TokenKind};
