use std::fmt;

use crate::error::{InputError, KeymillError, Result};

/// Which of the two key curves a code describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveKind {
    /// The mirrored curve milled as a left and a right half.
    Double,
    /// The single centre curve.
    Single,
}

impl CurveKind {
    /// Returns the argument prefix that introduces a code of this kind.
    #[must_use]
    pub fn prefix(self) -> char {
        match self {
            Self::Double => 'd',
            Self::Single => 's',
        }
    }

    /// Returns a human readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Double => "double curve",
            Self::Single => "single curve",
        }
    }
}

/// A lock profile code as a list of pin digits, least significant first.
///
/// The least significant digit belongs to the first pin. When a code is
/// typed as `d123`, pin one gets digit `1`, so the written order is the
/// least-significant-first order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LockCode {
    digits: Vec<u8>,
}

impl LockCode {
    /// Decomposes a numeric code into its decimal digits, least significant first.
    ///
    /// Zero has no digits.
    #[must_use]
    pub fn from_value(mut value: u64) -> Self {
        let mut digits = Vec::new();
        while value > 0 {
            #[allow(clippy::cast_possible_truncation)]
            let digit = (value % 10) as u8;
            digits.push(digit);
            value /= 10;
        }
        Self { digits }
    }

    /// Creates a code from digits given least significant first.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidCode` if a digit is not in `0..=9`.
    pub fn from_digits(digits: Vec<u8>) -> Result<Self> {
        if let Some(bad) = digits.iter().find(|&&d| d > 9) {
            return Err(InputError::InvalidCode(format!("{bad} is not a decimal digit")).into());
        }
        Ok(Self { digits })
    }

    /// Parses a code written as its digits in pin order, e.g. `"123"`.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidCode` if the text is empty or has a
    /// non-digit character.
    pub fn parse_digits(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(InputError::InvalidCode("empty code".to_owned()).into());
        }
        let digits = text
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .and_then(|d| u8::try_from(d).ok())
                    .ok_or_else(|| KeymillError::from(InputError::InvalidCode(text.to_owned())))
            })
            .collect::<Result<Vec<u8>>>()?;
        Ok(Self { digits })
    }

    /// Finds the first argument starting with the prefix of `kind` and parses
    /// the rest of it with [`LockCode::parse_digits`].
    ///
    /// # Errors
    ///
    /// Returns `InputError::MissingInput` if no argument carries the prefix,
    /// or `InputError::InvalidCode` if the digits are malformed.
    pub fn from_arguments<S: AsRef<str>>(kind: CurveKind, args: &[S]) -> Result<Self> {
        let arg = args
            .iter()
            .map(AsRef::<str>::as_ref)
            .find(|a| a.starts_with(kind.prefix()))
            .ok_or(InputError::MissingInput(kind.name()))?;
        Self::parse_digits(&arg[kind.prefix().len_utf8()..])
    }

    /// Returns the digits, least significant first.
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Checks the code against the curve's digit range and the key's pin count.
    ///
    /// # Errors
    ///
    /// Returns `InputError::DigitOutOfRange` or `InputError::TooManyPositions`.
    pub fn validate(&self, max_digit: u8, positions: usize) -> Result<()> {
        if let Some(&digit) = self.digits.iter().find(|&&d| d > max_digit) {
            return Err(InputError::DigitOutOfRange {
                digit,
                max: max_digit,
            }
            .into());
        }
        if self.digits.len() > positions {
            return Err(InputError::TooManyPositions {
                count: self.digits.len(),
                max: positions,
            }
            .into());
        }
        Ok(())
    }
}

impl From<u64> for LockCode {
    fn from(value: u64) -> Self {
        Self::from_value(value)
    }
}

impl fmt::Display for LockCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.digits {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}
