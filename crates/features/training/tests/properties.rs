use kennel_training::{
    CaptureSink, Dog, FixedRoll, School, TrainingError, next_handle, success_or_fail,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn next_handle_exceeds_every_key(keys in proptest::collection::vec(-1_000_i64..1_000, 0..32)) {
        let handle = next_handle(keys.iter().copied()).expect("keys are far below i64::MAX");
        prop_assert!(keys.iter().all(|&k| handle > k));
        if keys.is_empty() {
            prop_assert_eq!(handle, 1);
        }
    }

    #[test]
    fn next_handle_fails_only_at_the_top_of_the_range(keys in proptest::collection::vec(any::<i64>(), 1..16)) {
        let largest = keys.iter().copied().max().unwrap_or_default();
        match next_handle(keys.iter().copied()) {
            Ok(handle) => {
                prop_assert_eq!(handle, largest + 1);
            },
            Err(err) => {
                prop_assert_eq!(largest, i64::MAX);
                prop_assert!(matches!(err, TrainingError::HandlesExhausted { .. }), "unexpected error: {:?}", err);
            },
        }
    }

    #[test]
    fn obedience_never_exceeds_five(start in 0_u8..=u8::MAX, lessons in 0_u8..8) {
        let dog = Dog::builder("Rex").obedience(start).sink(CaptureSink::new()).roll(FixedRoll::ALWAYS).build();
        let mut school = School::default();
        for _ in 0..lessons {
            school.teach(&dog).expect("enrolled");
        }
        prop_assert!(dog.obedience() <= 5);
        prop_assert_eq!(dog.obedience(), (start.min(5) + lessons).min(5));
    }

    #[test]
    fn handles_are_positive_and_strictly_increasing(count in 1_usize..16) {
        let mut school = School::default();
        let dog = Dog::builder("Rex").sink(CaptureSink::new()).build();
        let mut last = 0;
        for _ in 0..count {
            let handle = school.teach(&dog).expect("enrolled");
            prop_assert!(handle > last);
            last = handle;
        }
    }

    #[test]
    fn roll_succeeds_below_threshold(draw in 0.0_f64..1.0, obedience in 0_u8..=5) {
        let expected = draw < f64::from(obedience) / 5.0;
        prop_assert_eq!(success_or_fail(&FixedRoll(draw), obedience), expected);
    }
}
