//! Validated password length.

use std::fmt;
use std::str::FromStr;

use super::Error;

/// A password length inside `[MIN, MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LengthSpec(usize);

impl LengthSpec {
    pub const MIN: usize = 12;
    pub const MAX: usize = 52;

    pub fn new(length: usize) -> Result<Self, Error> {
        if (Self::MIN..=Self::MAX).contains(&length) {
            Ok(Self(length))
        } else {
            Err(Error::InvalidLength { length })
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for LengthSpec {
    type Error = Error;

    fn try_from(length: usize) -> Result<Self, Self::Error> {
        Self::new(length)
    }
}

impl FromStr for LengthSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let length = s
            .trim()
            .parse::<usize>()
            .map_err(|_| Error::NotANumber(s.trim().to_string()))?;
        Self::new(length)
    }
}

impl fmt::Display for LengthSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_inclusive_bounds() {
        assert_eq!(LengthSpec::new(12).map(LengthSpec::get), Ok(12));
        assert_eq!(LengthSpec::new(52).map(LengthSpec::get), Ok(52));
    }

    #[test]
    fn rejects_just_outside_bounds() {
        assert_eq!(LengthSpec::new(11), Err(Error::InvalidLength { length: 11 }));
        assert_eq!(LengthSpec::new(53), Err(Error::InvalidLength { length: 53 }));
        assert_eq!(LengthSpec::new(0), Err(Error::InvalidLength { length: 0 }));
    }

    #[test]
    fn parses_trimmed_input() {
        assert_eq!(" 20\n".parse::<LengthSpec>().map(LengthSpec::get), Ok(20));
        assert_eq!(
            "abc".parse::<LengthSpec>(),
            Err(Error::NotANumber("abc".to_string()))
        );
        assert_eq!("-3".parse::<LengthSpec>(), Err(Error::NotANumber("-3".to_string())));
        assert_eq!("60".parse::<LengthSpec>(), Err(Error::InvalidLength { length: 60 }));
    }
}
