/// Flag argument specification. Flags can come with no argument, optional
/// argument, or required argument.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Arg {
    #[default]
    None,
    /// Value is taken only when attached to the flag, e.g. `-cvalue`.
    Optional,
    /// Value is attached (`-afile`) or taken from the next token (`-a file`).
    Required,
}

impl Arg {
    /// Suffix used for this argument kind in a getopt option string.
    pub fn optstring_suffix(&self) -> &'static str {
        match self {
            Arg::None => "",
            Arg::Optional => "::",
            Arg::Required => ":",
        }
    }
}
