use crate::lex::{lookup_identifier, Span, Token, TokenKind, TokenKind::*};
use std::iter::FusedIterator;

pub struct Lexer<'a> {
    src: &'a str,
    start_pos: usize,
    pos: usize,
    done: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            start_pos: 0,
            pos: 0,
            done: false,
        }
    }

    pub fn source(&self) -> &'a str {
        self.src
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn scan_all(&mut self) -> Vec<Token<'a>> {
        let mut tokens = vec![];
        loop {
            let t = self.scan_one();
            let eof = t.is_eof();
            tokens.push(t);
            if eof {
                break;
            }
        }

        log::debug!("scanned {} tokens from {} bytes", tokens.len(), self.src.len());
        tokens
    }

    /// Scans the next token. Once the source is exhausted every call
    /// returns `Eof` with empty text.
    ///
    /// A non-ASCII character is a single `Unknown` token covering all of its
    /// UTF-8 bytes, so such input yields fewer tokens than one per byte.
    pub fn scan_one(&mut self) -> Token<'a> {
        self.skip_whitespace();
        self.start_pos = self.pos;

        if self.eof() {
            return Token::eof(self.src.len());
        }

        let c = self.peek();
        let t = if is_ident_start(c) {
            self.ident()
        } else if c.is_ascii_digit() {
            self.number()
        } else {
            self.single(c)
        };

        log::trace!("{} at {}..{}", t, t.span.lo(), t.span.hi());
        t
    }

    fn single(&mut self, c: u8) -> Token<'a> {
        let kind = match c {
            b'=' => Assignment,
            b'+' => Plus,
            b'-' => Minus,
            b'*' => Multiply,
            b'/' => Divide,
            b'%' => Modulo,
            b'&' => BitwiseAnd,
            b'|' => BitwiseOr,
            b'~' => BitwiseNot,
            b'^' => BitwiseXor,
            b'<' => LessThan,
            b'>' => GreaterThan,
            b'!' => LogicalNot,
            b'?' => Question,
            b':' => Colon,
            b';' => Semicolon,
            b'.' => Dot,
            b',' => Comma,
            b'(' => LeftParenthesis,
            b')' => RightParenthesis,
            b'{' => LeftCurlyBrace,
            b'}' => RightCurlyBrace,
            b'[' => LeftSquareBracket,
            b']' => RightSquareBracket,
            b'#' => Comment,
            c if c.is_ascii() => Unknown,
            _ => {
                self.pos += self.src[self.pos..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
                return self.add_token(Unknown);
            }
        };

        self.advance();
        self.add_token(kind)
    }

    fn ident(&mut self) -> Token<'a> {
        while is_ident_continue(self.peek()) {
            self.advance();
        }

        let kind = lookup_identifier(self.text());
        self.add_token(kind)
    }

    fn number(&mut self) -> Token<'a> {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        self.add_token(Number)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), b' ' | b'\t' | b'\r' | b'\n') {
            self.advance();
        }
    }

    fn add_token(&self, kind: TokenKind) -> Token<'a> {
        Token::new(kind, self.text(), self.mk_span())
    }

    fn text(&self) -> &'a str {
        &self.src[self.start_pos..self.pos]
    }

    fn mk_span(&self) -> Span {
        Span::new(self.start_pos, self.pos)
    }

    fn eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Current byte, or 0 past the end. 0 matches no token class.
    fn peek(&self) -> u8 {
        self.src.as_bytes().get(self.pos).copied().unwrap_or_default()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.done {
            return None;
        }

        let t = self.scan_one();
        self.done = t.is_eof();
        Some(t)
    }
}

impl FusedIterator for Lexer<'_> {}

fn is_ident_start(c: u8) -> bool {
    matches!(c, b'a'..=b'z' | b'A'..=b'Z' | b'_')
}

fn is_ident_continue(c: u8) -> bool {
    matches!(c, b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'0'..=b'9')
}
