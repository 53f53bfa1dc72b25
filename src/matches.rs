use std::fmt;
use std::str::FromStr;

pub use arg::Arg;
pub use operand::{Operand, OperandList};

use crate::error::{Error, Result};

pub mod arg;
pub mod operand;

/// One occurrence of a recognized flag together with its captured argument
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Flag {
    short: char,
    arg: Arg,
}

impl Flag {
    pub fn new(short: char, arg: Arg) -> Flag {
        Flag { short, arg }
    }

    pub fn short(&self) -> char {
        self.short
    }

    pub fn arg(&self) -> &Arg {
        &self.arg
    }
}

/// Result of scanning an argument vector. Every flag occurrence is kept in
/// the order it was seen; lookups return the latest one, so a repeated flag
/// overwrites its earlier value.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Matches {
    occurrences: Vec<Flag>,
    operands: OperandList,
}

impl Matches {
    pub(crate) fn new() -> Matches {
        Matches::default()
    }

    pub(crate) fn push_flag(&mut self, flag: Flag) {
        self.occurrences.push(flag);
    }

    pub(crate) fn push_operand(&mut self, operand: Operand) {
        self.operands.push(operand);
    }

    pub fn is_present(&self, short: char) -> bool {
        self.get(short).is_some()
    }

    /// Latest occurrence of `short`
    pub fn get(&self, short: char) -> Option<&Flag> {
        self.occurrences.iter().rev().find(|f| f.short == short)
    }

    /// Value captured by the latest occurrence of `short`. None if the flag
    /// was never given or carried no value.
    pub fn value(&self, short: char) -> Option<&str> {
        self.get(short).and_then(|f| f.arg.raw())
    }

    /// Parse the latest value of `short` into `T`.
    ///
    /// # Errors
    ///
    /// * `Error::InvalidOperand` - the value does not parse as `T`
    pub fn value_as<T: FromStr>(&self, short: char) -> Result<Option<T>> {
        match self.get(short) {
            Some(flag) => flag
                .arg
                .get_as()
                .map_err(|_| Error::InvalidOperand(flag.arg.raw().unwrap_or("").to_owned())),
            None => Ok(None),
        }
    }

    pub fn count(&self, short: char) -> usize {
        self.occurrences.iter().filter(|f| f.short == short).count()
    }

    pub fn occurrences(&self) -> &[Flag] {
        &self.occurrences
    }

    pub fn operands(&self) -> &OperandList {
        &self.operands
    }
}

/// Quote a word for a POSIX shell using single quotes
fn shell_quote(word: &str) -> String {
    format!("'{}'", word.replace('\'', "'\\''"))
}

/// getopt(1) normalized output: every flag separated out, values quoted,
/// then `--` and the quoted operands.
impl fmt::Display for Matches {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for flag in self.occurrences.iter() {
            write!(f, " -{}", flag.short)?;
            match &flag.arg {
                Arg::None => {}
                Arg::Optional(val) => write!(f, " {}", shell_quote(val.as_deref().unwrap_or("")))?,
                Arg::Required(val) => write!(f, " {}", shell_quote(val))?,
            }
        }

        f.write_str(" --")?;
        for operand in self.operands.iter() {
            write!(f, " {}", shell_quote(operand.value()))?;
        }

        Ok(())
    }
}
