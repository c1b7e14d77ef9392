//! Party statistics derived from the current selections.

use crate::model::{Candidate, GroupedMatch, Role};
use crate::selection::SelectionStore;

/// Summary over selected candidates only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregate {
    pub average_power: f64,
    pub damage_count: usize,
    pub support_count: usize,
}

/// Summarizes the given selections.
///
/// Returns `None` when the iterator is empty. Falling back to the match-wide
/// numbers is the caller's job (see [`DisplayAggregate::resolve`]).
pub fn summarize<'a, I>(selected: I) -> Option<Aggregate>
where
    I: IntoIterator<Item = &'a Candidate>,
{
    let mut total = 0.0;
    let mut count = 0usize;
    let mut damage_count = 0;
    let mut support_count = 0;

    for candidate in selected {
        total += candidate.power;
        count += 1;
        match candidate.role {
            Role::Damage => damage_count += 1,
            Role::Support => support_count += 1,
        }
    }

    (count > 0).then(|| Aggregate {
        average_power: total / count as f64,
        damage_count,
        support_count,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateSource {
    /// Computed from the operator's picks.
    Selection,
    /// Precomputed numbers from the match.
    Fallback,
}

/// Numbers shown in a card header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayAggregate {
    pub aggregate: Aggregate,
    pub source: AggregateSource,
}

impl DisplayAggregate {
    /// Uses the selection summary when anything is picked, the match fallback otherwise.
    pub fn resolve(grouped: &GroupedMatch, selections: &SelectionStore) -> Self {
        match summarize(selections.iter_selected(grouped).map(|(_, c)| c)) {
            Some(aggregate) => Self {
                aggregate,
                source: AggregateSource::Selection,
            },
            None => Self {
                aggregate: Aggregate {
                    average_power: grouped.average_power,
                    damage_count: grouped.dealer_count,
                    support_count: grouped.support_count,
                },
                source: AggregateSource::Fallback,
            },
        }
    }

    pub fn is_from_selection(&self) -> bool {
        self.source == AggregateSource::Selection
    }
}
