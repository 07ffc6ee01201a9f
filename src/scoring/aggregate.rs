use super::response::ResponseSet;
use crate::catalog::InstrumentBank;
use crate::error::ScoringError;
use std::collections::BTreeMap;

/// Running totals for one category of one instrument.
///
/// `achievable_max` grows only for items actually answered, so the
/// normalization denominator is submission-dependent rather than fixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct CategoryTally {
    pub raw_sum: i64,
    pub items_counted: u32,
    pub achievable_max: i64,
}

impl CategoryTally {
    /// Raw sum as a percentage of the achievable maximum. `None` when no item
    /// of the category was answered; callers must route that through an
    /// explicit default branch.
    pub fn percentage(&self) -> Option<f64> {
        if self.achievable_max == 0 {
            return None;
        }
        Some(self.raw_sum as f64 / self.achievable_max as f64 * 100.0)
    }

    pub fn rounded_percentage(&self) -> Option<u8> {
        self.percentage().map(|pct| pct.round() as u8)
    }
}

/// Sum answered item values into per-category totals, applying reverse-scoring
/// inversion. Values are validated against the bank's scale before use.
pub(crate) fn tally_categories<K: Ord + Copy>(
    responses: &ResponseSet,
    bank: &InstrumentBank<K>,
) -> Result<BTreeMap<K, CategoryTally>, ScoringError> {
    let scale = bank.scale();
    let mut tallies: BTreeMap<K, CategoryTally> = BTreeMap::new();

    for item in bank.items() {
        let Some(answer) = responses.get(item.id) else {
            continue;
        };
        let value = answer
            .scale_value()
            .ok_or_else(|| ScoringError::NonNumericValue {
                question: item.id,
                value: answer.clone(),
            })?;
        if !scale.contains(value) {
            return Err(ScoringError::OutOfScale {
                question: item.id,
                value,
                min: scale.min,
                max: scale.max,
            });
        }

        let scored = if item.reverse_scored {
            scale.invert(value)
        } else {
            value
        };

        let tally = tallies.entry(item.category).or_default();
        tally.raw_sum += scored;
        tally.items_counted += 1;
        tally.achievable_max += scale.max;
    }

    Ok(tallies)
}

/// Rounded percentage for a single category, `None` when unanswered.
pub(crate) fn category_percent<K: Ord>(
    tallies: &BTreeMap<K, CategoryTally>,
    key: K,
) -> Option<u8> {
    tallies.get(&key).and_then(CategoryTally::rounded_percentage)
}

/// Rounded percentage over the union of several categories, `None` when none
/// of them were answered.
pub(crate) fn merged_percent<K: Ord + Copy>(
    tallies: &BTreeMap<K, CategoryTally>,
    keys: &[K],
) -> Option<u8> {
    let mut merged = CategoryTally::default();
    for key in keys {
        if let Some(tally) = tallies.get(key) {
            merged.raw_sum += tally.raw_sum;
            merged.items_counted += tally.items_counted;
            merged.achievable_max += tally.achievable_max;
        }
    }
    merged.rounded_percentage()
}

/// Rounded mean of the percentages that are present, `None` when all inputs
/// are unanswered.
pub(crate) fn mean_percent(values: &[Option<u8>]) -> Option<u8> {
    let present: Vec<f64> = values.iter().flatten().map(|pct| f64::from(*pct)).collect();
    if present.is_empty() {
        return None;
    }
    Some((present.iter().sum::<f64>() / present.len() as f64).round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{InstrumentBank, ScaleBounds, ScaleItem};

    fn bank() -> InstrumentBank<&'static str> {
        InstrumentBank::new(
            ScaleBounds::standard(),
            vec![
                ScaleItem {
                    id: 1,
                    category: "warmth",
                    reverse_scored: false,
                },
                ScaleItem {
                    id: 2,
                    category: "warmth",
                    reverse_scored: true,
                },
                ScaleItem {
                    id: 3,
                    category: "distance",
                    reverse_scored: false,
                },
            ],
        )
    }

    #[test]
    fn sums_and_inverts_reverse_scored_items() {
        let responses: ResponseSet = [(1u16, 4i64), (2, 1), (3, 2)].into_iter().collect();
        let tallies = tally_categories(&responses, &bank()).expect("valid responses");

        let warmth = tallies.get("warmth").expect("warmth answered");
        // 4 + (6 - 1) = 9 of an achievable 10
        assert_eq!(warmth.raw_sum, 9);
        assert_eq!(warmth.items_counted, 2);
        assert_eq!(warmth.achievable_max, 10);
        assert_eq!(warmth.rounded_percentage(), Some(90));

        assert_eq!(category_percent(&tallies, "distance"), Some(40));
    }

    #[test]
    fn absent_items_do_not_count_as_zero() {
        let responses: ResponseSet = [(1u16, 5i64)].into_iter().collect();
        let tallies = tally_categories(&responses, &bank()).expect("valid responses");

        assert_eq!(category_percent(&tallies, "warmth"), Some(100));
        assert_eq!(category_percent(&tallies, "distance"), None);
    }

    #[test]
    fn rejects_out_of_scale_values() {
        let responses: ResponseSet = [(1u16, 9i64)].into_iter().collect();
        let err = tally_categories(&responses, &bank()).expect_err("out of scale");
        assert_eq!(
            err,
            ScoringError::OutOfScale {
                question: 1,
                value: 9,
                min: 1,
                max: 5
            }
        );
    }

    #[test]
    fn rejects_non_numeric_values() {
        let mut responses = ResponseSet::new();
        responses.insert(3, "often");
        let err = tally_categories(&responses, &bank()).expect_err("not numeric");
        assert!(matches!(
            err,
            ScoringError::NonNumericValue { question: 3, .. }
        ));
    }

    #[test]
    fn merged_percent_spans_categories() {
        let responses: ResponseSet = [(1u16, 5i64), (3, 1)].into_iter().collect();
        let tallies = tally_categories(&responses, &bank()).expect("valid responses");
        // (5 + 1) of 10
        assert_eq!(merged_percent(&tallies, &["warmth", "distance"]), Some(60));
        assert_eq!(merged_percent(&tallies, &["missing"]), None);
    }

    #[test]
    fn mean_percent_skips_unanswered_entries() {
        assert_eq!(mean_percent(&[Some(40), None, Some(61)]), Some(51));
        assert_eq!(mean_percent(&[None, None]), None);
    }
}
