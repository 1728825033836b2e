//! Wall-clock helper.

use chrono::Utc;

/// Current time as a Unix timestamp in fractional seconds.
pub fn now_unix() -> f64 {
  Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn now_unix_is_recent_and_increasing() {
    let a = now_unix();
    let b = now_unix();
    // Well past 2020-01-01 and never going backwards.
    assert!(a > 1_577_836_800.0);
    assert!(b >= a);
  }
}
