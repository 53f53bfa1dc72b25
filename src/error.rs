use std::fmt::{Display, Formatter, Result as FmtResult};

/// Errors raised while building an option specification, scanning
/// arguments, or evaluating an arithmetic expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A flag character appeared that the option specification does not
    /// declare.
    UnrecognizedOption(char),
    /// A value-taking flag was the last thing on the command line.
    MissingOptionValue(char),
    /// The same flag character was declared twice in one specification.
    DuplicateFlag(char),
    /// A character that can never be a flag (`-`, or a stray `:` in an
    /// option string).
    InvalidFlagChar(char),
    /// A program received the wrong number of operands.
    InvalidArgumentCount { expected: usize, received: usize },
    /// The arithmetic operator token did not start with `+`, `-`, `*` or `/`.
    UnknownOperator(String),
    /// An operand could not be read as an integer.
    InvalidOperand(String),
    /// Integer arithmetic left the range of `i32`.
    ArithmeticOverflow,
    /// simplelog could not be installed as the global logger
    LoggerInitFailed(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Error::UnrecognizedOption(c) => write!(f, "unrecognized option '-{}'", c),
            Error::MissingOptionValue(c) => {
                write!(f, "missing required value for option '-{}'", c)
            }
            Error::DuplicateFlag(c) => write!(f, "flag '-{}' is declared more than once", c),
            Error::InvalidFlagChar(c) => write!(f, "'{}' cannot be used as a flag", c),
            Error::InvalidArgumentCount { expected, received } => write!(
                f,
                "wrong number of operands. Received {}, expected {}",
                received, expected,
            ),
            Error::UnknownOperator(op) => write!(f, "Operacao ({}) desconhecida.", op),
            Error::InvalidOperand(s) => write!(f, "'{}' is not an integer", s),
            Error::ArithmeticOverflow => f.write_str("result does not fit in a 32 bit integer"),
            Error::LoggerInitFailed(s) => write!(f, "logger init failed: {}", s),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
