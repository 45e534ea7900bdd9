//! Pure stat-update and derivation functions.
//!
//! Every function here takes a record by value and returns a new one; none
//! of them keep state or fail. A made shot always counts as an attempt, and
//! corrections never leave `made > attempted`.

use crate::box_score::{BoxScoreRow, MadeAttempted, Percentage};
use hoops_core::{CounterField, ShotCategory, StatRecord};

/// Records a made shot: `made` and `attempted` both go up by one.
#[must_use]
pub fn apply_made_shot(mut record: StatRecord, category: ShotCategory) -> StatRecord {
    let line = record.shots_mut(category);
    *line = line.with_make();
    record
}

/// Records a missed shot: only `attempted` goes up.
#[must_use]
pub fn apply_missed_shot(mut record: StatRecord, category: ShotCategory) -> StatRecord {
    let line = record.shots_mut(category);
    *line = line.with_miss();
    record
}

/// Increments one simple counter.
#[must_use]
pub fn apply_simple_event(mut record: StatRecord, field: CounterField) -> StatRecord {
    let counter = record.counter_mut(field);
    *counter = counter.saturating_add(1);
    record
}

/// Takes back a made shot and its attempt. Unchanged if there is no make.
#[must_use]
pub fn revert_made_shot(mut record: StatRecord, category: ShotCategory) -> StatRecord {
    let line = record.shots_mut(category);
    if let Some(corrected) = line.without_make() {
        *line = corrected;
    }
    record
}

/// Takes back a missed attempt. Unchanged if every attempt was a make.
#[must_use]
pub fn revert_missed_shot(mut record: StatRecord, category: ShotCategory) -> StatRecord {
    let line = record.shots_mut(category);
    if let Some(corrected) = line.without_miss() {
        *line = corrected;
    }
    record
}

/// Decrements one simple counter, floored at zero.
#[must_use]
pub fn revert_simple_event(mut record: StatRecord, field: CounterField) -> StatRecord {
    let counter = record.counter_mut(field);
    *counter = counter.saturating_sub(1);
    record
}

/// Points scored from a record.
pub fn points(record: &StatRecord) -> u32 {
    ShotCategory::ALL
        .iter()
        .map(|&c| record.shots(c).made() * c.points())
        .sum()
}

/// Derives the box-score row for a record.
pub fn derive_box_score(record: &StatRecord) -> BoxScoreRow {
    let points = points(record);

    let field_goals = MadeAttempted {
        made: record.two.made() + record.three.made(),
        attempted: record.two.attempted() + record.three.attempted(),
    };
    let rebounds_total = record.rebounds_off + record.rebounds_def;
    let missed_field_goals = field_goals.missed();
    let missed_free_throws = record.free_throws.missed();

    let positive = i64::from(points) + i64::from(rebounds_total) + i64::from(record.assists);
    let negative = i64::from(missed_field_goals)
        + i64::from(missed_free_throws)
        + i64::from(record.turnovers);

    BoxScoreRow {
        points,
        field_goals,
        fg_pct: Percentage::of(field_goals.made, field_goals.attempted),
        two: record.two.into(),
        two_pct: Percentage::of_line(record.two),
        three: record.three.into(),
        three_pct: Percentage::of_line(record.three),
        free_throws: record.free_throws.into(),
        ft_pct: Percentage::of_line(record.free_throws),
        rebounds_off: record.rebounds_off,
        rebounds_def: record.rebounds_def,
        rebounds_total,
        assists: record.assists,
        turnovers: record.turnovers,
        fouls: record.fouls,
        missed_field_goals,
        missed_free_throws,
        efficiency: positive - negative,
    }
}

/// Sums points over every record. Recomputed on each call.
pub fn derive_team_score<'a, I>(records: I) -> u32
where
    I: IntoIterator<Item = &'a StatRecord>,
{
    records.into_iter().map(points).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoops_core::ShotLine;

    fn example_record() -> StatRecord {
        StatRecord {
            two: ShotLine::new(ShotCategory::Two, 3, 5).unwrap(),
            three: ShotLine::new(ShotCategory::Three, 1, 2).unwrap(),
            free_throws: ShotLine::new(ShotCategory::FreeThrow, 2, 2).unwrap(),
            rebounds_off: 1,
            rebounds_def: 3,
            assists: 2,
            turnovers: 1,
            fouls: 0,
        }
    }

    #[test]
    fn made_shot_counts_as_attempt() {
        for category in ShotCategory::ALL {
            let record = apply_made_shot(StatRecord::ZERO, category);
            assert_eq!(record.shots(category).made(), 1);
            assert_eq!(record.shots(category).attempted(), 1);
        }
    }

    #[test]
    fn missed_shot_only_attempt() {
        let record = apply_missed_shot(StatRecord::ZERO, ShotCategory::Three);
        assert_eq!(record.three.made(), 0);
        assert_eq!(record.three.attempted(), 1);
        assert_eq!(record.two, ShotLine::ZERO);
    }

    #[test]
    fn simple_event_touches_one_field() {
        let record = apply_simple_event(StatRecord::ZERO, CounterField::Turnovers);
        assert_eq!(record.turnovers, 1);
        let mut expected = StatRecord::ZERO;
        expected.turnovers = 1;
        assert_eq!(record, expected);
    }

    #[test]
    fn revert_made_on_empty_line_is_noop() {
        let record = apply_missed_shot(StatRecord::ZERO, ShotCategory::Two);
        assert_eq!(revert_made_shot(record, ShotCategory::Two), record);
    }

    #[test]
    fn revert_missed_never_drops_below_made() {
        let record = apply_made_shot(StatRecord::ZERO, ShotCategory::FreeThrow);
        assert_eq!(revert_missed_shot(record, ShotCategory::FreeThrow), record);

        let record = apply_missed_shot(record, ShotCategory::FreeThrow);
        let reverted = revert_missed_shot(record, ShotCategory::FreeThrow);
        assert_eq!(reverted.free_throws.made(), 1);
        assert_eq!(reverted.free_throws.attempted(), 1);
    }

    #[test]
    fn revert_made_removes_pair() {
        let record = example_record();
        let reverted = revert_made_shot(record, ShotCategory::Two);
        assert_eq!(reverted.two.made(), 2);
        assert_eq!(reverted.two.attempted(), 4);
    }

    #[test]
    fn revert_simple_floors_at_zero() {
        let record = revert_simple_event(StatRecord::ZERO, CounterField::Fouls);
        assert_eq!(record.fouls, 0);
        let record = revert_simple_event(example_record(), CounterField::ReboundsDef);
        assert_eq!(record.rebounds_def, 2);
    }

    #[test]
    fn example_box_score() {
        let row = derive_box_score(&example_record());
        assert_eq!(row.points, 11);
        assert_eq!(row.field_goals, MadeAttempted { made: 4, attempted: 7 });
        assert_eq!(row.fg_pct.to_string(), "57.1%");
        assert_eq!(row.two_pct.to_string(), "60.0%");
        assert_eq!(row.three_pct.to_string(), "50.0%");
        assert_eq!(row.ft_pct.to_string(), "100.0%");
        assert_eq!(row.rebounds_total, 4);
        assert_eq!(row.missed_field_goals, 3);
        assert_eq!(row.missed_free_throws, 0);
        assert_eq!(row.efficiency, 13);
    }

    #[test]
    fn zero_attempts_have_zero_percentages() {
        let row = derive_box_score(&StatRecord::ZERO);
        assert_eq!(row.fg_pct, Percentage::ZERO);
        assert_eq!(row.two_pct, Percentage::ZERO);
        assert_eq!(row.three_pct, Percentage::ZERO);
        assert_eq!(row.ft_pct, Percentage::ZERO);
        assert_eq!(row.efficiency, 0);
    }

    #[test]
    fn efficiency_can_be_negative() {
        let mut record = StatRecord::ZERO;
        record = apply_missed_shot(record, ShotCategory::Three);
        record = apply_missed_shot(record, ShotCategory::FreeThrow);
        record = apply_simple_event(record, CounterField::Turnovers);
        assert_eq!(derive_box_score(&record).efficiency, -3);
    }

    #[test]
    fn fouls_do_not_affect_efficiency() {
        let record = apply_simple_event(StatRecord::ZERO, CounterField::Fouls);
        let row = derive_box_score(&record);
        assert_eq!(row.fouls, 1);
        assert_eq!(row.efficiency, 0);
    }

    #[test]
    fn team_score_sums_points() {
        let a = example_record();
        let b = apply_made_shot(StatRecord::ZERO, ShotCategory::Three);
        assert_eq!(derive_team_score([&a, &b]), 14);
        assert_eq!(derive_team_score(std::iter::empty()), 0);
    }

    mod proptests {
        use super::super::*;
        use hoops_core::{CounterField, ShotCategory, StatRecord};
        use proptest::prelude::*;

        fn category() -> impl Strategy<Value = ShotCategory> {
            prop::sample::select(ShotCategory::ALL.to_vec())
        }

        fn field() -> impl Strategy<Value = CounterField> {
            prop::sample::select(CounterField::ALL.to_vec())
        }

        proptest! {
            #[test]
            fn made_shot_changes_exactly_two_counters(
                cat in category(),
                misses in 0u32..5,
                makes in 0u32..5
            ) {
                let mut before = StatRecord::ZERO;
                for _ in 0..makes {
                    before = apply_made_shot(before, cat);
                }
                for _ in 0..misses {
                    before = apply_missed_shot(before, cat);
                }
                let after = apply_made_shot(before, cat);

                prop_assert_eq!(after.shots(cat).made(), before.shots(cat).made() + 1);
                prop_assert_eq!(after.shots(cat).attempted(), before.shots(cat).attempted() + 1);

                let mut restored = after;
                *restored.shots_mut(cat) = before.shots(cat);
                prop_assert_eq!(restored, before);
            }

            #[test]
            fn derivation_is_pure(cat in category(), f in field(), n in 0usize..10) {
                let mut record = StatRecord::ZERO;
                for i in 0..n {
                    record = if i % 2 == 0 {
                        apply_made_shot(record, cat)
                    } else {
                        apply_simple_event(record, f)
                    };
                }
                prop_assert_eq!(derive_box_score(&record), derive_box_score(&record));
            }

            #[test]
            fn efficiency_matches_formula(
                two_made in 0u32..10, two_miss in 0u32..10,
                three_made in 0u32..10, three_miss in 0u32..10,
                ft_made in 0u32..10, ft_miss in 0u32..10,
                oreb in 0u32..10, dreb in 0u32..10, ast in 0u32..10, to in 0u32..10
            ) {
                let mut record = StatRecord::ZERO;
                for (cat, made, miss) in [
                    (ShotCategory::Two, two_made, two_miss),
                    (ShotCategory::Three, three_made, three_miss),
                    (ShotCategory::FreeThrow, ft_made, ft_miss),
                ] {
                    for _ in 0..made {
                        record = apply_made_shot(record, cat);
                    }
                    for _ in 0..miss {
                        record = apply_missed_shot(record, cat);
                    }
                }
                record.rebounds_off = oreb;
                record.rebounds_def = dreb;
                record.assists = ast;
                record.turnovers = to;

                let row = derive_box_score(&record);
                let points = 2 * two_made + 3 * three_made + ft_made;
                let expected = i64::from(points + oreb + dreb + ast)
                    - i64::from(two_miss + three_miss + ft_miss + to);
                prop_assert_eq!(row.points, points);
                prop_assert_eq!(row.efficiency, expected);
            }
        }
    }
}
