use crate::error::ParseError;

/// One `kN<TAB>vN` record split out of a single input line.
///
/// The suffix `N` is an opaque string shared between the key and the value;
/// it is not required to be numeric. It may also be empty: the key `k`
/// expects the value `v`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    /// Full key, including the leading `k`.
    pub key: &'a str,
    /// Value exactly as it appeared after the separator.
    pub value: &'a str,
    suffix: &'a str,
}

impl<'a> Record<'a> {
    /// Split `line` on its first tab into a key/value pair.
    ///
    /// `line` must already be stripped of surrounding whitespace; interior
    /// whitespace is preserved verbatim on both sides of the separator.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MissingSeparator`] when the line has no tab and
    /// [`ParseError::InvalidKey`] when the key does not start with `k`.
    pub fn parse(line: &'a str) -> Result<Self, ParseError> {
        let (key, value) = line
            .split_once('\t')
            .ok_or_else(|| ParseError::MissingSeparator(line.to_string()))?;
        let suffix = key
            .strip_prefix('k')
            .ok_or_else(|| ParseError::InvalidKey(key.to_string()))?;
        Ok(Self { key, value, suffix })
    }

    /// Key suffix shared with the expected value.
    #[must_use]
    pub fn suffix(&self) -> &'a str {
        self.suffix
    }

    /// Value this record's key demands: `v` followed by the suffix.
    #[must_use]
    pub fn expected_value(&self) -> String {
        format!("v{}", self.suffix)
    }

    /// Whether the value equals the one derived from the key.
    #[must_use]
    pub fn matches(&self) -> bool {
        self.value
            .strip_prefix('v')
            .is_some_and(|rest| rest == self.suffix)
    }
}
