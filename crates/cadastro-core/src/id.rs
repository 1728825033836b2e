//! Sortable unique-id generation.
//!
//! Contact ids are ULIDs: 26-character Crockford base32 strings with a
//! millisecond timestamp prefix, so later-created ids sort after earlier
//! ones. A shared [`ulid::Generator`] keeps ids strictly increasing within
//! the same millisecond.

use std::sync::{Arc, Mutex};

use ulid::{Generator, Ulid};

/// Thread-safe monotonic ULID source.
///
/// Cloning is cheap and shares the underlying generator, so every clone
/// draws from the same monotonic sequence.
#[derive(Clone)]
pub struct IdGenerator {
  inner: Arc<Mutex<Generator>>,
}

impl IdGenerator {
  pub fn new() -> Self {
    Self {
      inner: Arc::new(Mutex::new(Generator::new())),
    }
  }

  /// Produce the next id.
  ///
  /// The generator can only fail if its 80-bit random component overflows
  /// within a single millisecond; a fresh random ULID is used then.
  pub fn next_id(&self) -> String {
    let mut r#gen = self.inner.lock().unwrap_or_else(|e| e.into_inner());
    r#gen.generate().unwrap_or_else(|_| Ulid::new()).to_string()
  }
}

impl Default for IdGenerator {
  fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ids_are_unique_and_sorted() {
    let ids = IdGenerator::new();
    let generated: Vec<String> = (0..1000).map(|_| ids.next_id()).collect();

    let mut sorted = generated.clone();
    sorted.sort();
    sorted.dedup();

    assert_eq!(sorted.len(), generated.len(), "ids must be unique");
    assert_eq!(sorted, generated, "ids must come out in sort order");
  }

  #[test]
  fn ids_are_26_chars() {
    let ids = IdGenerator::new();
    assert_eq!(ids.next_id().len(), 26);
  }

  #[test]
  fn clones_share_the_sequence() {
    let a = IdGenerator::new();
    let b = a.clone();
    let first = a.next_id();
    let second = b.next_id();
    assert!(second > first);
  }
}
