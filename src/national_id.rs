//! National identifier (CPF) with two trailing checksum digits.

use std::fmt;
use std::str::FromStr;

use crate::errors::NationalIdErr;

const LEN: usize = 11;

/// Check whether `id` is a well formed national identifier.
///
/// Every non-digit character is ignored, so both `111.444.777-35` and
/// `11144477735` are accepted.
pub fn validate(id: &str) -> bool {
    let digits = digits_of(id);
    if digits.len() != LEN {
        return false;
    }

    // sequences like "00000000000" pass the checksum but are never issued
    if digits.iter().all(|d| *d == digits[0]) {
        return false;
    }

    check_digit(&digits[..9]) == digits[9] && check_digit(&digits[..10]) == digits[10]
}

/// Check digit computed over `leading` digits with weights counting down to 2.
fn check_digit(leading: &[u32]) -> u32 {
    let top = leading.len() as u32 + 1;
    let sum: u32 = leading
        .iter()
        .zip((2..=top).rev())
        .map(|(digit, weight)| digit * weight)
        .sum();

    match (sum * 10) % 11 {
        10 => 0,
        rem => rem,
    }
}

fn digits_of(id: &str) -> Vec<u32> {
    id.chars().filter_map(|c| c.to_digit(10)).collect()
}

/// Validated national identifier stored as its 11 digits
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NationalId(String);

impl NationalId {
    /// Only the digits, e.g. `11144477735`
    pub fn as_digits(&self) -> &str {
        &self.0
    }
}

impl FromStr for NationalId {
    type Err = NationalIdErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !validate(s) {
            return Err(NationalIdErr);
        }
        Ok(Self(s.chars().filter(char::is_ascii_digit).collect()))
    }
}

impl fmt::Display for NationalId {
    /// Formatted as `111.444.777-35`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.0;
        write!(f, "{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..11])
    }
}
