use crate::lex::Span;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Span,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str, span: Span) -> Self {
        Self { kind, text, span }
    }

    pub fn eof(pos: usize) -> Self {
        Self {
            kind: TokenKind::Eof,
            text: "",
            span: Span::new(pos, pos),
        }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Eof,

    // Keywords
    Variable,
    Function,
    Return,
    Print,
    If,
    Else,
    For,
    While,
    True,
    False,
    Null,
    Break,
    Continue,

    // Literals.
    Identifier,
    String,
    Number,
    Bool,

    // Arithmetic
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,

    // Bitwise
    BitwiseAnd,
    BitwiseOr,
    BitwiseNot,
    BitwiseXor,
    BitwiseRightShift,
    BitwiseLeftShift,

    // Relational
    LessThan,
    GreaterThan,
    LessEqual,
    GreaterEqual,
    Equality,
    Inequality,

    // Logical
    LogicalAnd,
    LogicalOr,
    LogicalNot,

    // Assignment
    Assignment,
    PlusAssignment,
    MinusAssignment,
    MultiplyAssignment,
    DivideAssignment,
    ModuloAssignment,
    BitwiseAndAssignment,
    BitwiseOrAssignment,
    BitwiseXorAssignment,
    BitwiseLeftShiftAssignment,
    BitwiseRightShiftAssignment,

    // Delimiters
    Question,
    Colon,
    Semicolon,
    Dot,
    Comma,
    LeftParenthesis,
    RightParenthesis,
    LeftCurlyBrace,
    RightCurlyBrace,
    LeftSquareBracket,
    RightSquareBracket,

    // Escape sequences. Declared for string literals, not produced yet.
    EscapeBell,
    EscapeBackspace,
    EscapeFormFeed,
    EscapeNewLine,
    EscapeCarriageReturn,
    EscapeHorizontalTab,
    EscapeVerticalTab,
    EscapeBackslash,
    EscapeQuote,
    EscapeApostrophe,

    Comment,
    Unknown,
}

impl TokenKind {
    pub fn spelling(&self) -> Option<&'static str> {
        use TokenKind::*;
        let s = match self {
            Variable => "var",
            Function => "fn",
            Return => "return",
            Print => "print",
            If => "if",
            Else => "else",
            For => "for",
            While => "while",
            True => "true",
            False => "false",
            Null => "null",
            Break => "break",
            Continue => "continue",

            Plus => "+",
            Minus => "-",
            Multiply => "*",
            Divide => "/",
            Modulo => "%",

            BitwiseAnd => "&",
            BitwiseOr => "|",
            BitwiseNot => "~",
            BitwiseXor => "^",
            BitwiseRightShift => ">>",
            BitwiseLeftShift => "<<",

            LessThan => "<",
            GreaterThan => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equality => "==",
            Inequality => "!=",

            LogicalAnd => "&&",
            LogicalOr => "||",
            LogicalNot => "!",

            Assignment => "=",
            PlusAssignment => "+=",
            MinusAssignment => "-=",
            MultiplyAssignment => "*=",
            DivideAssignment => "/=",
            ModuloAssignment => "%=",
            BitwiseAndAssignment => "&=",
            BitwiseOrAssignment => "|=",
            BitwiseXorAssignment => "^=",
            BitwiseLeftShiftAssignment => "<<=",
            BitwiseRightShiftAssignment => ">>=",

            Question => "?",
            Colon => ":",
            Semicolon => ";",
            Dot => ".",
            Comma => ",",
            LeftParenthesis => "(",
            RightParenthesis => ")",
            LeftCurlyBrace => "{",
            RightCurlyBrace => "}",
            LeftSquareBracket => "[",
            RightSquareBracket => "]",

            EscapeBell => "\\a",
            EscapeBackspace => "\\b",
            EscapeFormFeed => "\\f",
            EscapeNewLine => "\\n",
            EscapeCarriageReturn => "\\r",
            EscapeHorizontalTab => "\\t",
            EscapeVerticalTab => "\\v",
            EscapeBackslash => "\\\\",
            EscapeQuote => "\\\"",
            EscapeApostrophe => "\\'",

            Comment => "#",

            Eof | Identifier | String | Number | Bool | Unknown => return None,
        };
        Some(s)
    }

    pub fn is_keyword(&self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            Variable
                | Function
                | Return
                | Print
                | If
                | Else
                | For
                | While
                | True
                | False
                | Null
                | Break
                | Continue
        )
    }

    pub fn is_op(&self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            Plus | Minus
                | Multiply
                | Divide
                | Modulo
                | BitwiseAnd
                | BitwiseOr
                | BitwiseNot
                | BitwiseXor
                | BitwiseRightShift
                | BitwiseLeftShift
                | LessThan
                | GreaterThan
                | LessEqual
                | GreaterEqual
                | Equality
                | Inequality
                | LogicalAnd
                | LogicalOr
                | LogicalNot
        ) || self.is_assign()
    }

    pub fn is_assign(&self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            Assignment
                | PlusAssignment
                | MinusAssignment
                | MultiplyAssignment
                | DivideAssignment
                | ModuloAssignment
                | BitwiseAndAssignment
                | BitwiseOrAssignment
                | BitwiseXorAssignment
                | BitwiseLeftShiftAssignment
                | BitwiseRightShiftAssignment
        )
    }

    pub fn is_delimiter(&self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            Question
                | Colon
                | Semicolon
                | Dot
                | Comma
                | LeftParenthesis
                | RightParenthesis
                | LeftCurlyBrace
                | RightCurlyBrace
                | LeftSquareBracket
                | RightSquareBracket
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

pub fn lookup_identifier(spelling: &str) -> TokenKind {
    use TokenKind::*;
    match spelling {
        "var" => Variable,
        "fn" => Function,
        "return" => Return,
        "print" => Print,
        "if" => If,
        "else" => Else,
        "for" => For,
        "while" => While,
        "true" => True,
        "false" => False,
        "null" => Null,
        "break" => Break,
        "continue" => Continue,
        _ => Identifier,
    }
}
