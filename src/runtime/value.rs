use std::fmt;

/// A dynamically typed runtime value.
///
/// Equality is type-strict: values of different variants never compare equal.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Value {
    Nil,
    Boolean(bool),
    Number(f64),
    String(String),
}

impl Value {
    /// Only `nil` and `false` are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Nil => false,
            Self::Boolean(b) => *b,
            Self::Number(_) | Self::String(_) => true,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Value;

    #[test]
    fn truthiness() {
        assert!(!Value::Nil.is_truthy());
        assert!(!Value::Boolean(false).is_truthy());
        assert!(Value::Boolean(true).is_truthy());
        assert!(Value::Number(0.0).is_truthy());
        assert!(Value::String(String::new()).is_truthy());
    }

    #[test]
    fn equality_is_type_strict() {
        assert_ne!(Value::Number(1.0), Value::Boolean(true));
        assert_ne!(Value::Nil, Value::Boolean(false));
        assert_ne!(Value::String("1".into()), Value::Number(1.0));
        assert_eq!(Value::Nil, Value::Nil);
        assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
    }

    #[test]
    fn display() {
        assert_eq!(Value::Nil.to_string(), "nil");
        assert_eq!(Value::Number(8.0).to_string(), "8");
        assert_eq!(Value::Number(3.5).to_string(), "3.5");
        assert_eq!(Value::Number(-2.0).to_string(), "-2");
        assert_eq!(Value::String("aa".into()).to_string(), "aa");
        assert_eq!(Value::Boolean(false).to_string(), "false");
    }
}
