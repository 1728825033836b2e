//! Error types for `cadastro-core`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
  #[error("nome must not be empty")]
  EmptyNome,

  #[error("idade {0} out of range [0, 120)")]
  IdadeOutOfRange(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
