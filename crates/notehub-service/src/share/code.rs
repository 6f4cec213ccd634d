//! Share code generation.

use rand::RngExt;
use rand::distr::Alphanumeric;

/// Generates random alphanumeric share codes.
///
/// Uniqueness is probabilistic: at the default length of 10 the code
/// space exceeds 8×10^17, so creation does not pre-check the store and
/// instead retries on the store's unique-constraint rejection.
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    length: usize,
}

impl CodeGenerator {
    /// Creates a generator producing codes of the given length.
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    /// Generates one share code.
    pub fn generate(&self) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(self.length)
            .map(char::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_code_has_requested_length() {
        let generator = CodeGenerator::new(10);
        assert_eq!(generator.generate().len(), 10);
    }

    #[test]
    fn test_code_is_alphanumeric() {
        let code = CodeGenerator::new(10).generate();
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_codes_are_distinct_in_bulk() {
        let generator = CodeGenerator::new(10);
        let codes: HashSet<String> = (0..10_000).map(|_| generator.generate()).collect();
        assert_eq!(codes.len(), 10_000);
    }
}
