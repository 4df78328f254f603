//! Configuration name generation

use rand::Rng;
use rand::seq::IndexedRandom;

/// Length of generated configuration names
pub const NAME_LENGTH: usize = 8;

/// Alphabet of generated configuration names (no `q` or `v`)
pub const NAME_ALPHABET: &str = "abcdefghijklmnoprstuwxyz";

/// Source of names for configurations created without an explicit one
pub trait NameGenerator {
    /// Produce a string of `length` characters drawn from `alphabet`
    fn generate(&self, length: usize, alphabet: &str) -> String;
}

/// Random names drawn uniformly from the alphabet
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomNameGenerator;

impl NameGenerator for RandomNameGenerator {
    fn generate(&self, length: usize, alphabet: &str) -> String {
        random_name(&mut rand::rng(), length, alphabet)
    }
}

fn random_name<R: Rng + ?Sized>(rng: &mut R, length: usize, alphabet: &str) -> String {
    let symbols: Vec<char> = alphabet.chars().collect();
    (0..length)
        .map_while(|_| symbols.choose(rng).copied())
        .collect()
}

/// Always returns the same name, ignoring length and alphabet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedName(pub String);

impl NameGenerator for FixedName {
    fn generate(&self, _length: usize, _alphabet: &str) -> String {
        self.0.clone()
    }
}
