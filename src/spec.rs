pub use arg::Arg;
pub use flag::{Flag, FlagSet};
pub use options::{OptionSpec, Ordering};

pub mod arg;
pub mod flag;
mod options;
