use crate::runtime::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operator {
    Plus,
    Minus,
    Mul,
    Div,

    Not,
    NotEq,
    EqEq,

    Lt,
    LtEq,
    Gt,
    GtEq,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Assoc {
    Left,
}

pub(crate) type Precedence = u8;

impl Operator {
    /// Binding power when used as a binary operator. `None` for prefix-only operators.
    pub fn precedence(self) -> Option<Precedence> {
        match self {
            Self::EqEq | Self::NotEq => Some(1),
            Self::Lt | Self::LtEq | Self::Gt | Self::GtEq => Some(2),
            Self::Plus | Self::Minus => Some(3),
            Self::Mul | Self::Div => Some(4),
            Self::Not => None,
        }
    }

    pub fn assoc(self) -> Assoc {
        Assoc::Left
    }

    pub fn get(self) -> Option<(Precedence, Assoc)> {
        self.precedence().map(|prec| (prec, self.assoc()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Keyword {
    And,
    Class,
    Else,
    False,
    For,
    Fun,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,
}

impl Keyword {
    pub fn from_ident(s: &str) -> Option<Self> {
        let kw = match s {
            "and" => Self::And,
            "class" => Self::Class,
            "else" => Self::Else,
            "false" => Self::False,
            "for" => Self::For,
            "fun" => Self::Fun,
            "if" => Self::If,
            "nil" => Self::Nil,
            "or" => Self::Or,
            "print" => Self::Print,
            "return" => Self::Return,
            "super" => Self::Super,
            "this" => Self::This,
            "true" => Self::True,
            "var" => Self::Var,
            "while" => Self::While,
            _ => return None,
        };
        Some(kw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    Number,
    Str,
    Op(Operator),
    Kw(Keyword),
    Id,

    LParen,
    RParen,
    LCurly,
    RCurly,

    Eq,

    Comma,
    Dot,
    Semicolon,

    Eof,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: &'src str,
    /// Set for number and string tokens only.
    pub literal: Option<Value>,
    pub line: usize,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, lexeme: &'src str, line: usize) -> Self {
        Self {
            kind,
            lexeme,
            literal: None,
            line,
        }
    }

    pub fn with_literal(kind: TokenKind, lexeme: &'src str, literal: Value, line: usize) -> Self {
        Self {
            kind,
            lexeme,
            literal: Some(literal),
            line,
        }
    }

    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, "", line)
    }

    /// Where a diagnostic points: the quoted lexeme, or `end` for end of input.
    pub fn location(&self) -> String {
        match self.kind {
            TokenKind::Eof => "end".to_string(),
            _ => format!("'{}'", self.lexeme),
        }
    }
}
