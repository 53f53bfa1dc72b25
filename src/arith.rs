//! Single operation integer calculator used by the `calc` program:
//! `calc numero <operacao> numero`.
use std::fmt;

use log::trace;

use crate::error::{Error, Result};

/// Number of operands `calc` expects after the program name
pub const EXPECTED_OPERANDS: usize = 3;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Only the first character of the token is significant, so `+x` is
    /// still addition.
    ///
    /// # Errors
    ///
    /// * `Error::UnknownOperator` - the first character is not `+ - * /`, or
    ///   the token is empty
    pub fn from_token(token: &str) -> Result<Operator> {
        let symbol = token.chars().next();
        match symbol {
            Some('+') => Ok(Operator::Add),
            Some('-') => Ok(Operator::Sub),
            Some('*') => Ok(Operator::Mul),
            Some('/') => Ok(Operator::Div),
            Some(c) => Err(Error::UnknownOperator(c.to_string())),
            None => Err(Error::UnknownOperator(String::new())),
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Result of an evaluation. Division is carried out in floating point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Int(i32),
    Float(f32),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{:.2}", x),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Expression {
    lhs: i32,
    op: Operator,
    rhs: i32,
}

impl Expression {
    pub fn new(lhs: i32, op: Operator, rhs: i32) -> Expression {
        Expression { lhs, op, rhs }
    }

    /// Build an expression from `numero <operacao> numero`. `args` must not
    /// include the program name.
    ///
    /// # Errors
    ///
    /// * `Error::InvalidArgumentCount` - not exactly three operands
    /// * `Error::InvalidOperand` - a number does not fit in an `i32`
    /// * `Error::UnknownOperator` - see Operator::from_token
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Expression> {
        if args.len() != EXPECTED_OPERANDS {
            return Err(Error::InvalidArgumentCount {
                expected: EXPECTED_OPERANDS,
                received: args.len(),
            });
        }

        let lhs = parse_operand(args[0].as_ref())?;
        let op = Operator::from_token(args[1].as_ref())?;
        let rhs = parse_operand(args[2].as_ref())?;

        Ok(Expression::new(lhs, op, rhs))
    }

    /// # Errors
    ///
    /// * `Error::ArithmeticOverflow` - integer result leaves the `i32` range
    pub fn evaluate(&self) -> Result<Evaluation> {
        let (a, b) = (self.lhs, self.rhs);
        let value = match self.op {
            Operator::Add => a.checked_add(b).map(Value::Int),
            Operator::Sub => a.checked_sub(b).map(Value::Int),
            Operator::Mul => a.checked_mul(b).map(Value::Int),
            Operator::Div => Some(Value::Float(a as f32 / b as f32)),
        }
        .ok_or(Error::ArithmeticOverflow)?;

        trace!("{:?} evaluated to {:?}", self, value);
        Ok(Evaluation { expr: *self, value })
    }
}

fn parse_operand(token: &str) -> Result<i32> {
    token
        .trim()
        .parse()
        .map_err(|_| Error::InvalidOperand(token.to_owned()))
}

/// An expression together with its value; displays as `3 + 4 = 7`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evaluation {
    expr: Expression,
    value: Value,
}

impl Evaluation {
    pub fn value(&self) -> Value {
        self.value
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.expr.lhs, self.expr.op, self.expr.rhs, self.value
        )
    }
}

/// Usage text printed when `calc` gets the wrong number of arguments
pub fn usage(program: &str) -> String {
    format!(
        "Uso:\n\t {} numero <operacao> numero\n\n\
         Onde <operacao> e uma das operacoes matematicas basicas (+, -, *, /)",
        program
    )
}
