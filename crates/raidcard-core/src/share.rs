//! Plain-text party summary for pasting into chat.

use crate::aggregate::Aggregate;
use crate::model::GroupedMatch;
use crate::power::format_power;
use crate::selection::SelectionStore;

/// Builds the share text, or `None` when nothing is selected.
///
/// ```text
/// [<raid>] <difficulty> - 평균 <avg>
/// 1. ⚔️ <name> (<class>) <power> [<synergy>]
/// 2. 🛡️ <name> (<class>) <power>
/// ```
///
/// Lines follow slot order and are numbered from 1 over selected slots only.
pub fn format_share(
    grouped: &GroupedMatch,
    selections: &SelectionStore,
    aggregate: &Aggregate,
) -> Option<String> {
    if !selections.has_selection() {
        return None;
    }

    let mut lines = vec![format!(
        "[{}] {} - 평균 {}",
        grouped.raid_name,
        grouped.difficulty,
        format_power(aggregate.average_power)
    )];

    for (n, (_, candidate)) in selections.iter_selected(grouped).enumerate() {
        let synergy = candidate
            .visible_synergy()
            .map(|note| format!(" [{note}]"))
            .unwrap_or_default();
        lines.push(format!(
            "{}. {} {} ({}) {}{}",
            n + 1,
            candidate.role.share_marker(),
            candidate.name,
            candidate.class_name,
            format_power(candidate.power),
            synergy
        ));
    }

    Some(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::summarize;
    use crate::model::Role;
    use crate::test_support::sample_match;

    fn share(grouped: &GroupedMatch, store: &SelectionStore) -> Option<String> {
        let agg = summarize(store.iter_selected(grouped).map(|(_, c)| c))?;
        format_share(grouped, store, &agg)
    }

    #[test]
    fn test_nothing_selected_is_none() {
        let grouped = sample_match();
        let store = SelectionStore::for_match(&grouped);
        let agg = Aggregate {
            average_power: grouped.average_power,
            damage_count: 0,
            support_count: 0,
        };
        assert_eq!(format_share(&grouped, &store, &agg), None);
    }

    #[test]
    fn test_lines_follow_slot_order_and_numbering() {
        let grouped = sample_match();
        let mut store = SelectionStore::for_match(&grouped);
        store.toggle(&grouped, 1, &grouped.slots[1].candidates[0]);
        store.toggle(&grouped, 0, &grouped.slots[0].candidates[1]);

        let text = share(&grouped, &store).unwrap();
        assert_eq!(
            text,
            "[에키드나] 하드 - 평균 1,750.00\n\
             1. ⚔️ alpha1 (버서커) 2,000.00\n\
             2. 🛡️ beta-sup (바드) 1,500.00"
        );
    }

    #[test]
    fn test_numbering_skips_empty_slots() {
        let grouped = sample_match();
        let mut store = SelectionStore::for_match(&grouped);
        store.toggle(&grouped, 1, &grouped.slots[1].candidates[1]);

        let text = share(&grouped, &store).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("1. ⚔️ beta-dps"));
    }

    #[test]
    fn test_synergy_suffix_only_for_non_support() {
        let mut grouped = sample_match();
        grouped.slots[1].candidates[0].synergy = Some("공격력 증가".to_string());
        let mut store = SelectionStore::for_match(&grouped);
        store.toggle(&grouped, 1, &grouped.slots[1].candidates[0]);

        let support_text = share(&grouped, &store).unwrap();
        assert_eq!(
            support_text.lines().nth(1).unwrap(),
            "1. 🛡️ beta-sup (바드) 1,500.00"
        );

        grouped.slots[1].candidates[0].role = Role::Damage;
        let damage_text = share(&grouped, &store).unwrap();
        assert!(damage_text.lines().nth(1).unwrap().ends_with("[공격력 증가]"));
    }

    #[test]
    fn test_empty_synergy_note_omitted() {
        let mut grouped = sample_match();
        grouped.slots[0].candidates[0].synergy = Some(String::new());
        let mut store = SelectionStore::for_match(&grouped);
        store.toggle(&grouped, 0, &grouped.slots[0].candidates[0]);

        let text = share(&grouped, &store).unwrap();
        assert!(text.ends_with("1,000.00"));
    }
}
