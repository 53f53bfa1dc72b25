use std::str::FromStr;

pub type OperandList = Vec<Operand>;

/// A token that was neither a flag nor a flag's value
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Operand {
    value: String,
}

impl Operand {
    pub fn new(value: &str) -> Operand {
        Operand {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn value_as<T>(&self) -> Result<T, <T as FromStr>::Err>
    where
        T: FromStr,
    {
        self.value.parse()
    }
}

impl AsRef<str> for Operand {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::Operand;

    #[test]
    fn typed_value() {
        assert_eq!(Operand::new("-12").value_as::<i32>(), Ok(-12));
        assert!(Operand::new("twelve").value_as::<i32>().is_err());
        assert_eq!(Operand::new("fileA").value_as::<String>(), Ok("fileA".to_string()));
    }
}
