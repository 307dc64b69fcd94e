use std::fmt;

/// Order-independent key for a pair of normalized chemical names.
///
/// The lexicographically smaller name is always stored first, so
/// `PairKey::new(a, b) == PairKey::new(b, a)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    lo: String,
    hi: String,
}

impl PairKey {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            PairKey { lo: a, hi: b }
        } else {
            PairKey { lo: b, hi: a }
        }
    }

    pub fn first(&self) -> &str {
        &self.lo
    }

    pub fn second(&self) -> &str {
        &self.hi
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lo == name || self.hi == name
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}", self.lo, self.hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_independent() {
        assert_eq!(PairKey::new("water", "salt"), PairKey::new("salt", "water"));
    }

    #[test]
    fn test_smaller_first() {
        let key = PairKey::new("vinegar", "baking soda");
        assert_eq!(key.first(), "baking soda");
        assert_eq!(key.second(), "vinegar");
        assert_eq!(key.to_string(), "baking soda + vinegar");
    }

    #[test]
    fn test_same_name_twice() {
        let key = PairKey::new("water", "water");
        assert_eq!(key.first(), key.second());
        assert!(key.contains("water"));
        assert!(!key.contains("salt"));
    }
}
