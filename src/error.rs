/// A required selection was never supplied (or was negative).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingOption {
    /// Short description used in the message, e.g. "an ifft option".
    pub what: &'static str,
}

impl std::fmt::Display for MissingOption {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "Error: Need to choose {}", self.what)
    }
}

impl std::error::Error for MissingOption {}

/// A declared range or a requested value that cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// The declared range itself is empty (`min > max`).
    InvalidRange { name: String, min: i64, max: i64 },
    /// The target value lies outside `[min, max]`.
    OutOfRange {
        name: String,
        min: i64,
        max: i64,
        value: i64,
    },
}

impl RangeError {
    /// Which define and values were rejected.
    pub fn detail(&self) -> String {
        match self {
            RangeError::InvalidRange { name, min, max } => {
                format!("{name}: empty range [{min}, {max}]")
            }
            RangeError::OutOfRange {
                name,
                min,
                max,
                value,
            } => format!("{name}: {value} not in [{min}, {max}]"),
        }
    }
}

impl std::fmt::Display for RangeError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            RangeError::InvalidRange { .. } => {
                write!(f, "ERROR: max_val or min_val is set incorrectly")
            }
            RangeError::OutOfRange { .. } => {
                write!(f, "ERROR: max_val or min_val or set_val is set incorrectly")
            }
        }
    }
}

impl std::error::Error for RangeError {}
