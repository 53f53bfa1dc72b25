use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

use lexical_sort::{natural_lexical_cmp, StringSort};
use log::trace;

use super::arg::Arg;
use super::flag::{self, Flag, FlagSet};
use crate::error::{Error, Result};

/// Controls what happens when the scanner meets an operand before the
/// options are exhausted.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Ordering {
    /// Keep scanning; operands and options may be interleaved.
    #[default]
    Permute,
    /// The first operand ends option scanning.
    RequireOrder,
}

/// Option specification for a whole program. Each flag character must be
/// unique.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct OptionSpec {
    flags: FlagSet,
    ordering: Ordering,
}

impl OptionSpec {
    pub fn new() -> OptionSpec {
        OptionSpec::default()
    }

    /// Build a specification from a getopt option string such as `"a:b:"`.
    ///
    /// Each character declares a flag. A single trailing `:` makes the flag
    /// require a value and `::` makes the value optional. A leading `+`
    /// selects [`Ordering::RequireOrder`]. A leading `:` is accepted for
    /// compatibility and has no effect, since scan errors are always
    /// returned to the caller.
    ///
    /// # Errors
    ///
    /// * `Error::InvalidFlagChar` - for `-`, whitespace, or a `:` that does
    ///   not follow a flag
    /// * `Error::DuplicateFlag` - when a character is declared twice
    pub fn parse(optstring: &str) -> Result<OptionSpec> {
        let mut spec = OptionSpec::new();
        let mut chars = optstring.chars().peekable();

        if chars.next_if_eq(&'+').is_some() {
            spec.ordering = Ordering::RequireOrder;
        }
        chars.next_if_eq(&':');

        while let Some(short) = chars.next() {
            let arg = Self::arg_suffix(&mut chars);
            spec = spec.add_flag(short, arg, "")?;
        }

        trace!("Parsed option string '{}' into {:?}", optstring, spec);
        Ok(spec)
    }

    fn arg_suffix(chars: &mut Peekable<Chars>) -> Arg {
        if chars.next_if_eq(&':').is_none() {
            Arg::None
        } else if chars.next_if_eq(&':').is_none() {
            Arg::Required
        } else {
            Arg::Optional
        }
    }

    /// Declare another flag.
    ///
    /// # Errors
    ///
    /// * `Error::InvalidFlagChar` - `short` is `-`, `:` or whitespace
    /// * `Error::DuplicateFlag` - `short` is already declared
    pub fn add_flag(mut self, short: char, arg: Arg, help: &str) -> Result<OptionSpec> {
        if !flag::is_valid_short(short) {
            return Err(Error::InvalidFlagChar(short));
        }
        if self.find(short).is_some() {
            return Err(Error::DuplicateFlag(short));
        }

        self.flags.push(Flag::new(short, arg, help));
        Ok(self)
    }

    pub fn set_ordering(mut self, ordering: Ordering) -> OptionSpec {
        self.ordering = ordering;
        self
    }

    pub fn find(&self, short: char) -> Option<&Flag> {
        self.flags.iter().find(|f| f.short() == short)
    }

    pub fn flags(&self) -> &FlagSet {
        &self.flags
    }

    pub fn ordering(&self) -> Ordering {
        self.ordering
    }

    /// One line synopsis, e.g. `Usage: files [-a arg] [-b arg] [operand ...]`
    pub fn usage(&self, program: &str) -> String {
        let mut usage = format!("Usage: {}", program);
        for flag in self.sorted_flags() {
            usage += &format!(" [{}]", flag.synopsis());
        }
        usage += " [operand ...]";

        usage
    }

    /// One line per flag with its help text, aligned on the help column.
    pub fn help(&self, prefix: &str) -> String {
        let flags = self.sorted_flags();
        let width = flags
            .iter()
            .map(|f| f.synopsis().len())
            .max()
            .unwrap_or(0);

        let mut help = String::new();
        for flag in flags {
            let line = format!("{}{:<width$}  {}", prefix, flag.synopsis(), flag.help());
            help += line.trim_end();
            help += "\n";
        }

        help
    }

    fn sorted_flags(&self) -> Vec<&Flag> {
        let mut flags: Vec<&Flag> = self.flags.iter().collect();
        flags.string_sort_unstable(natural_lexical_cmp);
        flags
    }
}

/// Renders the specification back into option string syntax.
impl fmt::Display for OptionSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.ordering == Ordering::RequireOrder {
            f.write_str("+")?;
        }
        for flag in self.flags.iter() {
            write!(f, "{}{}", flag.short(), flag.arg_spec().optstring_suffix())?;
        }
        Ok(())
    }
}
