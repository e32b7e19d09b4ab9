pub(crate) mod eval;
pub(crate) mod value;

pub(crate) use eval::Interpreter;
pub(crate) use value::Value;
