//! Stable sorting of filtered records
//!
//! Numeric fields compare numerically; everything else compares by string
//! representation. The sort is stable, so records with equal keys keep
//! their filter-stage relative order.

use std::cmp::Ordering;

use crate::model::{ApiRecord, RecordField};

use super::descriptor::SortOrder;

/// Sorts record slices by a single field
pub struct RecordSorter;

impl RecordSorter {
    /// Stable sort by `field` in the given direction
    pub fn sort(records: &mut [&ApiRecord], field: RecordField, order: SortOrder) {
        records.sort_by(|a, b| {
            let ordering = Self::compare(a, b, field);
            match order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
    }

    fn compare(a: &ApiRecord, b: &ApiRecord, field: RecordField) -> Ordering {
        if let (Some(a_num), Some(b_num)) = (field.number_of(a), field.number_of(b)) {
            return a_num.partial_cmp(&b_num).unwrap_or(Ordering::Equal);
        }

        field.text_of(a).cmp(&field.text_of(b))
    }
}
