use super::arg::Arg;

/// Flags in declaration order. Flag characters are unique within a set.
pub type FlagSet = Vec<Flag>;

/// Specification for a single short command line flag
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Flag {
    short: char,
    label: String,
    arg: Arg,
    help: String,
}

impl Flag {
    pub fn new(short: char, arg: Arg, help: &str) -> Flag {
        Flag {
            short,
            label: short.to_string(),
            arg,
            help: help.to_owned(),
        }
    }

    pub fn short(&self) -> char {
        self.short
    }

    pub fn arg_spec(&self) -> Arg {
        self.arg
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    /// Text shown for this flag in a usage synopsis, e.g. `-a arg`
    pub fn synopsis(&self) -> String {
        match self.arg {
            Arg::None => format!("-{}", self.short),
            Arg::Optional => format!("-{}[arg]", self.short),
            Arg::Required => format!("-{} arg", self.short),
        }
    }
}

impl AsRef<str> for Flag {
    fn as_ref(&self) -> &str {
        &self.label
    }
}

/// check if a character may be declared as a flag. `-` would make `--`
/// ambiguous and `:` is reserved by option string syntax.
pub fn is_valid_short(c: char) -> bool {
    c != '-' && c != ':' && !c.is_whitespace()
}

/// check if a token is an option token (a `-` followed by at least one
/// character). A lone `-` is an operand.
pub fn is_option(token: &str) -> bool {
    token.starts_with('-') && token.len() > 1
}

/// check if a token ends option scanning
pub fn is_terminator(token: &str) -> bool {
    token == "--"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_tokens() {
        assert!(is_option("-a"));
        assert!(is_option("-afile"));
        assert!(is_option("--"));
        assert!(!is_option("-"));
        assert!(!is_option("file"));
        assert!(!is_option(""));
    }

    #[test]
    fn reserved_characters_are_not_flags() {
        assert!(is_valid_short('a'));
        assert!(is_valid_short('C'));
        assert!(is_valid_short('?'));
        assert!(!is_valid_short('-'));
        assert!(!is_valid_short(':'));
        assert!(!is_valid_short(' '));
    }

    #[test]
    fn synopsis_reflects_argument_kind() {
        assert_eq!(Flag::new('a', Arg::None, "").synopsis(), "-a");
        assert_eq!(Flag::new('b', Arg::Required, "").synopsis(), "-b arg");
        assert_eq!(Flag::new('c', Arg::Optional, "").synopsis(), "-c[arg]");
    }
}
