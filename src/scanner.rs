use log::{debug, trace};

use crate::error::{Error, Result};
use crate::matches::{self, Matches, Operand};
use crate::spec::{self, flag, OptionSpec, Ordering};

/// Walks an argument vector against an option specification. The position
/// in `args` is held in `cursor`; nothing is shared between scans, so
/// scanning the same input twice gives the same result.
#[derive(Debug)]
pub struct Scanner<'a, S> {
    spec: &'a OptionSpec,
    args: &'a [S],
    cursor: usize,
    ordering: Ordering,
}

impl<'a, S: AsRef<str>> Scanner<'a, S> {
    /// `args` must not include the program name.
    pub fn new(spec: &'a OptionSpec, args: &'a [S]) -> Scanner<'a, S> {
        Scanner {
            spec,
            args,
            cursor: 0,
            ordering: spec.ordering(),
        }
    }

    /// Override the ordering mode declared by the specification
    pub fn with_ordering(mut self, ordering: Ordering) -> Scanner<'a, S> {
        self.ordering = ordering;
        self
    }

    /// Consume the argument vector.
    ///
    /// # Errors
    ///
    /// * `Error::UnrecognizedOption` - a flag character is not declared
    /// * `Error::MissingOptionValue` - a value-taking flag ends the argument
    ///   vector
    pub fn scan(mut self) -> Result<Matches> {
        trace!(
            "Scanning {} tokens against '{}' ({:?})",
            self.args.len(),
            self.spec,
            self.ordering
        );

        let mut matches = Matches::new();

        while let Some(token) = self.next_token() {
            if flag::is_terminator(token) {
                trace!("'--' at token {}, remaining tokens are operands", self.cursor - 1);
                break;
            }

            if !flag::is_option(token) {
                matches.push_operand(Operand::new(token));
                if self.ordering == Ordering::RequireOrder {
                    trace!("Operand '{}' ends option scanning", token);
                    break;
                }
                continue;
            }

            self.scan_cluster(token, &mut matches)?;
        }

        while let Some(token) = self.next_token() {
            matches.push_operand(Operand::new(token));
        }

        debug!("Scan result: {:?}", matches);
        Ok(matches)
    }

    fn next_token(&mut self) -> Option<&'a str> {
        let args = self.args;
        let token = args.get(self.cursor)?;
        self.cursor += 1;
        Some(token.as_ref())
    }

    /// Handle one option token. A token may hold several flags (`-aC`); a
    /// flag that takes a value ends the cluster and claims the rest of it.
    fn scan_cluster(&mut self, token: &'a str, result: &mut Matches) -> Result<()> {
        let spec = self.spec;
        let cluster = &token[1..];

        for (idx, short) in cluster.char_indices() {
            let flag_spec = match spec.find(short) {
                Some(flag_spec) => flag_spec,
                None => {
                    debug!("Unrecognized flag '{}' in token '{}'", short, token);
                    return Err(Error::UnrecognizedOption(short));
                }
            };
            let rest = &cluster[idx + short.len_utf8()..];

            match flag_spec.arg_spec() {
                spec::Arg::None => {
                    result.push_flag(matches::Flag::new(short, matches::Arg::None));
                }
                spec::Arg::Optional => {
                    let value = if rest.is_empty() {
                        None
                    } else {
                        Some(rest.to_owned())
                    };
                    result.push_flag(matches::Flag::new(short, matches::Arg::Optional(value)));
                    return Ok(());
                }
                spec::Arg::Required => {
                    // the next token is taken even if it looks like a flag
                    let value = if rest.is_empty() {
                        self.next_token().ok_or(Error::MissingOptionValue(short))?
                    } else {
                        rest
                    };
                    result.push_flag(matches::Flag::new(
                        short,
                        matches::Arg::Required(value.to_owned()),
                    ));
                    return Ok(());
                }
            }
        }

        Ok(())
    }
}

/// Scan `args` (program name excluded) against `spec`.
pub fn scan<S: AsRef<str>>(spec: &OptionSpec, args: &[S]) -> Result<Matches> {
    Scanner::new(spec, args).scan()
}
