//! Property-based tests for the tally counters.
//!
//! Uses proptest to check the counting invariants over arbitrary sequences
//! of passing and failing assertions.

use proptest::prelude::*;
use tally::prelude::*;

fn plain() -> SummaryConfig {
    SummaryConfig::new().with_color(ColorChoice::Never)
}

fn kind_strategy() -> impl Strategy<Value = AssertionKind> {
    prop_oneof![
        Just(AssertionKind::Expression),
        Just(AssertionKind::Equal),
        Just(AssertionKind::Unequal),
        Just(AssertionKind::Larger),
    ]
}

proptest! {
    /// Every call counts once; failures count exactly the false predicates.
    #[test]
    fn prop_counts_match_outcomes(
        calls in prop::collection::vec((kind_strategy(), any::<bool>()), 0..64)
    ) {
        let mut summary = RunSummary::with_writer(Vec::new(), plain());
        for (kind, passed) in &calls {
            summary.record(*kind, *passed, "expr", "prop.rs", 1);
            prop_assert!(summary.failure_count() <= summary.total_tests());
        }
        let failures = calls.iter().filter(|(_, passed)| !passed).count();
        prop_assert_eq!(summary.total_tests(), calls.len());
        prop_assert_eq!(summary.failure_count(), failures);
        prop_assert_eq!(summary.passed_tests(), calls.len() - failures);
    }

    /// Failure numbers run 1, 2, 3, ... in order of occurrence.
    #[test]
    fn prop_failure_numbers_are_sequential(
        outcomes in prop::collection::vec(any::<bool>(), 0..64)
    ) {
        let mut summary = RunSummary::with_writer(Vec::new(), plain());
        let numbers: Vec<usize> = outcomes
            .iter()
            .filter_map(|passed| {
                summary
                    .record(AssertionKind::Expression, *passed, "expr", "prop.rs", 1)
                    .failure_number
            })
            .collect();
        let expected: Vec<usize> = (1..=numbers.len()).collect();
        prop_assert_eq!(numbers, expected);
    }

    /// Only failures write diagnostic lines, and the summary adds four more.
    #[test]
    fn prop_one_line_per_failure(
        outcomes in prop::collection::vec(any::<bool>(), 0..32)
    ) {
        let mut out = Vec::new();
        {
            let mut summary = RunSummary::with_writer(&mut out, plain());
            for passed in &outcomes {
                summary.record(AssertionKind::Equal, *passed, "a == b", "prop.rs", 9);
            }
        }
        let text = String::from_utf8(out).unwrap_or_default();
        let failures = outcomes.iter().filter(|passed| !**passed).count();
        prop_assert_eq!(text.matches(" failed: ").count(), failures);
        prop_assert_eq!(text.lines().count(), failures + 4);
        let total_line = format!("Total Tests: {}", outcomes.len());
        let failed_line = format!("Failed Tests: {failures}");
        prop_assert!(text.contains(&total_line));
        prop_assert!(text.contains(&failed_line));
    }

    /// The equality macro agrees with `==` for arbitrary integers.
    #[test]
    fn prop_check_eq_matches_native_equality(a in any::<i64>(), b in any::<i64>()) {
        let mut summary = RunSummary::with_writer(Vec::new(), plain());
        prop_assert_eq!(check_eq!(summary, a, b).passed, a == b);
        prop_assert_eq!(check_ne!(summary, a, b).passed, a != b);
        prop_assert_eq!(check_gt!(summary, a, b).passed, a > b);
        prop_assert_eq!(check!(summary, a <= b).passed, a <= b);
    }
}
