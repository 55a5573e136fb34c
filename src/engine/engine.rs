//! Query execution
//!
//! Execution flow, in strict order:
//! 1. Compile filter predicates from the descriptor
//! 2. Filter the snapshot (AND across all active predicates)
//! 3. Stable-sort when the sort field is recognized
//! 4. Slice out the requested page
//!
//! Same snapshot + same descriptor = same result, always.

use std::collections::BTreeMap;

use crate::model::{ApiRecord, RecordField};

use super::descriptor::QueryDescriptor;
use super::filters::FilterPredicate;
use super::result::QueryResult;
use super::sorter::RecordSorter;

/// Executes queries over record snapshots
pub struct QueryEngine;

impl QueryEngine {
    /// Runs a descriptor against a snapshot and returns one result page
    pub fn query(records: &[ApiRecord], descriptor: &QueryDescriptor) -> QueryResult {
        let predicates = Self::compile_filters(&descriptor.filters);

        let mut matched: Vec<&ApiRecord> = records
            .iter()
            .filter(|record| predicates.iter().all(|p| p.matches(record)))
            .collect();

        if let Some(field) = descriptor.sort_by.as_deref().and_then(RecordField::from_name) {
            RecordSorter::sort(&mut matched, field, descriptor.sort_order());
        }

        let page = descriptor.normalized_page();
        let limit = descriptor.normalized_limit();
        let total = matched.len();
        let total_pages = total.div_ceil(limit);
        let offset = (page - 1).saturating_mul(limit);

        let data: Vec<ApiRecord> = matched
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();

        QueryResult {
            page,
            limit,
            total,
            total_pages,
            data,
        }
    }

    /// Compiles predicates, dropping empty values and unknown field names
    fn compile_filters(filters: &BTreeMap<String, String>) -> Vec<FilterPredicate> {
        filters
            .iter()
            .filter_map(|(name, raw)| {
                let field = RecordField::from_name(name)?;
                FilterPredicate::compile(field, raw)
            })
            .collect()
    }
}
