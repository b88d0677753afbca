//! Property tests for lock count bookkeeping.
//!
//! Roots opened and closed inside `init` never end the loop early, and the
//! count after `run` is exactly the sum of the adjustments.

use proptest::prelude::*;
use weft_runtime::{EventLoop, InlineBackend};

proptest! {
    #[test]
    fn balanced_adjustments_inside_init(deltas in prop::collection::vec(-3i32..=3, 0..32)) {
        let total: i32 = deltas.iter().sum();
        prop_assume!(total <= 0);

        let el = EventLoop::new(InlineBackend::new());
        let mut observed = Vec::new();
        el.run(|| {
            for &delta in &deltas {
                el.add_lock_count(delta);
                observed.push(el.lock_count());
            }
            Ok(())
        })
        .unwrap();

        prop_assert!(!el.is_running());
        prop_assert_eq!(el.lock_count(), total);

        let mut expected = 1;
        for (delta, seen) in deltas.iter().zip(&observed) {
            expected += delta;
            prop_assert_eq!(*seen, expected);
        }
    }
}
