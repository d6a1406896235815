use std::any::type_name;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    #[error("can't parse `{input}` as {ty}: {reason}")]
    ParseNumber {
        ty: &'static str,
        input: String,
        reason: String,
    },

    /// An operation whose exact result is outside the range of the type.
    /// For unsigned types this includes subtracting a larger number.
    #[error("{ty} out of range: {a} {op} {b}")]
    Overflow {
        ty: &'static str,
        op: &'static str,
        a: String,
        b: String,
    },

    #[error("{value} doesn't fit in {ty}")]
    OverflowConversion { ty: &'static str, value: String },

    #[error("{ty} division by zero: {a} / 0")]
    DivisionByZero { ty: &'static str, a: String },
}

impl MathError {
    pub fn parse_number<T, V, R>(input: V, reason: R) -> Self
    where
        V: ToString,
        R: ToString,
    {
        Self::ParseNumber {
            ty: type_name::<T>(),
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn overflow<T>(a: T, op: &'static str, b: T) -> Self
    where
        T: ToString,
    {
        Self::Overflow {
            ty: type_name::<T>(),
            op,
            a: a.to_string(),
            b: b.to_string(),
        }
    }

    pub fn overflow_conversion<T, V>(value: V) -> Self
    where
        V: ToString,
    {
        Self::OverflowConversion {
            ty: type_name::<T>(),
            value: value.to_string(),
        }
    }

    pub fn division_by_zero<T>(a: T) -> Self
    where
        T: ToString,
    {
        Self::DivisionByZero {
            ty: type_name::<T>(),
            a: a.to_string(),
        }
    }
}

pub type MathResult<T> = core::result::Result<T, MathError>;
