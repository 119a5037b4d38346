mod scan;
mod span;
mod token;

pub use scan::Lexer;
pub use span::Span;
pub use token::{lookup_identifier, Token, TokenKind};
