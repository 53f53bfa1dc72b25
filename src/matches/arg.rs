use std::str::FromStr;

/// Argument captured for a flag occurrence. This mirrors spec::Arg with the
/// value filled in.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Arg {
    #[default]
    None,
    Optional(Option<String>),
    Required(String),
}

impl Arg {
    pub fn raw(&self) -> Option<&str> {
        match self {
            Arg::Optional(val) => val.as_deref(),
            Arg::Required(s) => Some(s),
            Arg::None => None,
        }
    }

    pub fn get_as<T>(&self) -> Result<Option<T>, <T as FromStr>::Err>
    where
        T: FromStr,
    {
        self.raw().map(str::parse).transpose()
    }
}
