use crate::syntax::Token;

#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub(crate) enum ErrorKind {
    #[error("Line {line}: {message}")]
    LexError { line: usize, message: String },

    #[error("Line {line}: {message} at {at}")]
    ParseError {
        line: usize,
        at: String,
        message: String,
    },

    #[error("Line {line}: {message} at {at}")]
    RuntimeError {
        line: usize,
        at: String,
        message: String,
    },

    #[error("Line {line}: {what} is not supported at {at}")]
    Unsupported {
        line: usize,
        at: String,
        what: String,
    },
}

impl ErrorKind {
    pub fn parse(token: &Token, message: impl Into<String>) -> Self {
        Self::ParseError {
            line: token.line,
            at: token.location(),
            message: message.into(),
        }
    }

    pub fn runtime(token: &Token, message: impl Into<String>) -> Self {
        Self::RuntimeError {
            line: token.line,
            at: token.location(),
            message: message.into(),
        }
    }

    pub fn unsupported(token: &Token, what: impl Into<String>) -> Self {
        Self::Unsupported {
            line: token.line,
            at: token.location(),
            what: what.into(),
        }
    }
}

pub(crate) type PResult<T> = Result<T, ErrorKind>;
