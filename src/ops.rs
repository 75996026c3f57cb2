use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Division by zero is not allowed.")]
    DivisionByZero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
        }
    }

    pub fn apply(&self, a: f64, b: f64) -> Result<f64, MathError> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide => {
                if b == 0.0 {
                    Err(MathError::DivisionByZero)
                } else {
                    Ok(a / b)
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Operation(Operation),
    Exit,
}

impl MenuChoice {
    /// Menu codes 1-5. Anything else, including non-numeric text, is rejected.
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().parse::<u8>() {
            Ok(1) => Some(Self::Operation(Operation::Add)),
            Ok(2) => Some(Self::Operation(Operation::Subtract)),
            Ok(3) => Some(Self::Operation(Operation::Multiply)),
            Ok(4) => Some(Self::Operation(Operation::Divide)),
            Ok(5) => Some(Self::Exit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_add() {
        assert_eq!(Operation::Add.apply(3.0, 4.0), Ok(7.0));
        assert_eq!(Operation::Add.apply(-1.5, 0.5), Ok(-1.0));
    }

    #[test]
    fn test_apply_subtract() {
        assert_eq!(Operation::Subtract.apply(5.0, 3.0), Ok(2.0));
        assert_eq!(Operation::Subtract.apply(0.0, 2.5), Ok(-2.5));
    }

    #[test]
    fn test_apply_multiply() {
        assert_eq!(Operation::Multiply.apply(6.0, 7.0), Ok(42.0));
        assert_eq!(Operation::Multiply.apply(1e3, 1e-3), Ok(1.0));
    }

    #[test]
    fn test_apply_divide() {
        assert_eq!(Operation::Divide.apply(10.0, 4.0), Ok(2.5));
        assert_eq!(Operation::Divide.apply(-9.0, 3.0), Ok(-3.0));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            Operation::Divide.apply(10.0, 0.0),
            Err(MathError::DivisionByZero)
        );
        assert_eq!(
            Operation::Divide.apply(0.0, 0.0),
            Err(MathError::DivisionByZero)
        );
    }

    #[test]
    fn test_divide_by_zero_message() {
        assert_eq!(
            MathError::DivisionByZero.to_string(),
            "Division by zero is not allowed."
        );
    }

    #[test]
    fn test_float_semantics() {
        assert_eq!(Operation::Add.apply(0.1, 0.2), Ok(0.1 + 0.2));
        assert_eq!(Operation::Divide.apply(1.0, 3.0), Ok(1.0 / 3.0));
    }

    #[test]
    fn test_choice_from_input() {
        assert_eq!(
            MenuChoice::from_input("1"),
            Some(MenuChoice::Operation(Operation::Add))
        );
        assert_eq!(
            MenuChoice::from_input("4"),
            Some(MenuChoice::Operation(Operation::Divide))
        );
        assert_eq!(MenuChoice::from_input("5"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_input(" 2 "), Some(MenuChoice::Operation(Operation::Subtract)));
    }

    #[test]
    fn test_choice_rejects_out_of_range() {
        assert_eq!(MenuChoice::from_input("0"), None);
        assert_eq!(MenuChoice::from_input("6"), None);
        assert_eq!(MenuChoice::from_input("9"), None);
        assert_eq!(MenuChoice::from_input("-1"), None);
    }

    #[test]
    fn test_choice_rejects_non_numeric() {
        assert_eq!(MenuChoice::from_input("abc"), None);
        assert_eq!(MenuChoice::from_input(""), None);
        assert_eq!(MenuChoice::from_input("2.5"), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Operation::Add.label(), "Add");
        assert_eq!(Operation::Subtract.label(), "Subtract");
        assert_eq!(Operation::Multiply.label(), "Multiply");
        assert_eq!(Operation::Divide.label(), "Divide");
    }
}
