// Fri Jan 16 2026 - Alex

use crate::pattern::PatternError;
use std::fmt;

/// A byte signature paired with a per-byte mask. A masked position matches
/// any byte; an unmasked position must equal the signature byte.
#[derive(Debug, Clone)]
pub struct Pattern {
    bytes: Vec<u8>,
    mask: Vec<bool>,
}

impl Pattern {
    pub fn new(bytes: Vec<u8>, mask: Vec<bool>) -> Result<Self, PatternError> {
        if bytes.len() != mask.len() {
            return Err(PatternError::LengthMismatch {
                signature: bytes.len(),
                mask: mask.len(),
            });
        }
        if bytes.is_empty() {
            return Err(PatternError::Empty);
        }
        Ok(Self { bytes, mask })
    }

    /// Build a pattern from a signature and an ASCII mask string. A `?` in
    /// the mask marks the byte as a wildcard, any other character requires
    /// an exact match.
    pub fn from_signature(signature: &[u8], mask: &str) -> Result<Self, PatternError> {
        let mask: Vec<bool> = mask.chars().map(|c| c != '?').collect();
        Self::new(signature.to_vec(), mask)
    }

    /// Parse a whitespace-separated hex pattern, e.g. `"48 89 ?? 05"`.
    /// `?` and `??` tokens are wildcards.
    pub fn from_hex(hex: &str) -> Result<Self, PatternError> {
        let mut bytes = Vec::new();
        let mut mask = Vec::new();

        for part in hex.split_whitespace() {
            if part == "?" || part == "??" {
                bytes.push(0);
                mask.push(false);
            } else if let Ok(byte) = u8::from_str_radix(part, 16) {
                bytes.push(byte);
                mask.push(true);
            } else {
                return Err(PatternError::InvalidHex(part.to_string()));
            }
        }

        Self::new(bytes, mask)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mask(&self) -> &[bool] {
        &self.mask
    }

    /// Whether `byte` is acceptable at pattern position `index`.
    pub fn accepts(&self, index: usize, byte: u8) -> bool {
        !self.mask[index] || self.bytes[index] == byte
    }

    pub fn matches(&self, data: &[u8]) -> bool {
        if data.len() < self.bytes.len() {
            return false;
        }

        self.bytes
            .iter()
            .zip(self.mask.iter())
            .zip(data.iter())
            .all(|((pattern_byte, &significant), &data_byte)| {
                !significant || *pattern_byte == data_byte
            })
    }

    pub fn significant_byte_count(&self) -> usize {
        self.mask.iter().filter(|&&m| m).count()
    }

    pub fn to_hex_string(&self) -> String {
        self.bytes
            .iter()
            .zip(self.mask.iter())
            .map(|(b, &m)| {
                if m {
                    format!("{:02X}", b)
                } else {
                    "??".to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes && self.mask == other.mask
    }
}

impl Eq for Pattern {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_signature() {
        let pattern = Pattern::from_signature(&[0x48, 0x89, 0x05], "xxx").unwrap();
        assert_eq!(pattern.len(), 3);
        assert_eq!(pattern.bytes(), &[0x48, 0x89, 0x05]);
        assert_eq!(pattern.mask(), &[true, true, true]);
    }

    #[test]
    fn test_from_signature_wildcard() {
        let pattern = Pattern::from_signature(&[0x48, 0x89, 0x05], "x?x").unwrap();
        assert!(pattern.accepts(1, 0xFF));
        assert!(pattern.accepts(1, 0x00));
        assert!(pattern.accepts(0, 0x48));
        assert!(!pattern.accepts(0, 0x49));
    }

    #[test]
    fn test_length_mismatch() {
        let result = Pattern::from_signature(&[0x48, 0x89], "xxx");
        assert!(matches!(
            result,
            Err(PatternError::LengthMismatch { signature: 2, mask: 3 })
        ));
    }

    #[test]
    fn test_empty_pattern() {
        assert!(matches!(
            Pattern::from_signature(&[], ""),
            Err(PatternError::Empty)
        ));
    }

    #[test]
    fn test_from_hex() {
        let pattern = Pattern::from_hex("48 89 ?? 05").unwrap();
        assert_eq!(pattern.len(), 4);
        assert_eq!(pattern.mask(), &[true, true, false, true]);
        assert_eq!(pattern.bytes()[0], 0x48);
    }

    #[test]
    fn test_from_hex_invalid_token() {
        assert!(matches!(
            Pattern::from_hex("48 GZ"),
            Err(PatternError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_matches_window() {
        let pattern = Pattern::from_hex("48 ?? 05").unwrap();
        assert!(pattern.matches(&[0x48, 0xAA, 0x05]));
        assert!(pattern.matches(&[0x48, 0x00, 0x05, 0x99]));
        assert!(!pattern.matches(&[0x49, 0xAA, 0x05]));
        assert!(!pattern.matches(&[0x48, 0xAA]));
    }

    #[test]
    fn test_to_hex_string() {
        let pattern = Pattern::from_signature(&[0x48, 0x89, 0x05], "x?x").unwrap();
        assert_eq!(pattern.to_hex_string(), "48 ?? 05");
    }

    #[test]
    fn test_significant_byte_count() {
        let pattern = Pattern::from_hex("48 ?? ?? 05").unwrap();
        assert_eq!(pattern.significant_byte_count(), 2);
    }
}
