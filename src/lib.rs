//! # optscan
//!
//! A getopt-style short option scanner and a handful of small programs built
//! on top of it.
//!
//! An [`spec::OptionSpec`] declares which flag characters a program accepts
//! and whether each one takes a value. [`scanner::scan`] walks an argument
//! vector against that specification and returns a [`matches::Matches`]
//! holding the flags that were seen and the remaining operands.
pub mod arith;
pub mod config;
pub mod error;
pub mod logging;
pub mod matches;
pub mod report;
pub mod scanner;
pub mod spec;
