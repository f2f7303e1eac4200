//! Time-based comment ID generation.
//!
//! Comment ids use the wire format `comment-<millis>`.
//! A process-wide monotonic guard keeps ids unique when two comments land
//! inside the same millisecond: the counter bumps forward instead of reusing
//! the clock value.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

/// Last-issued millis value; successive ids are strictly increasing.
static LAST_ISSUED: AtomicI64 = AtomicI64::new(0);

/// Returns a fresh `comment-<millis>` id based on the current instant.
pub fn next_comment_id() -> String {
    next_comment_id_at(Utc::now())
}

/// Returns a fresh id for the given instant, bumping past any id already
/// issued at or after it.
pub fn next_comment_id_at(now: DateTime<Utc>) -> String {
    let millis = now.timestamp_millis();
    let mut candidate = millis;
    loop {
        let last = LAST_ISSUED.load(Ordering::SeqCst);
        if candidate <= last {
            candidate = last + 1;
        }
        if LAST_ISSUED
            .compare_exchange(last, candidate, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            break;
        }
    }
    format!("comment-{candidate}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn id_has_wire_format() {
        let id = next_comment_id();
        assert!(id.starts_with("comment-"));
        let millis: i64 = id["comment-".len()..].parse().unwrap();
        assert!(millis > 0);
    }

    #[test]
    fn same_instant_yields_distinct_ids() {
        let now = Utc::now();
        let a = next_comment_id_at(now);
        let b = next_comment_id_at(now);
        let c = next_comment_id_at(now);
        let unique: HashSet<_> = [&a, &b, &c].into_iter().collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn ids_are_strictly_increasing() {
        let parse = |id: &str| id["comment-".len()..].parse::<i64>().unwrap();
        let a = parse(&next_comment_id());
        let b = parse(&next_comment_id());
        assert!(b > a);
    }
}
