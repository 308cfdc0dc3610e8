//! Presence aggregation and display filtering.
//!
//! Pure derivations over a roster slice. Text filtering exists for
//! display only: draw eligibility is always computed from the full,
//! unfiltered roster via [`present_of`].

use super::Player;

/// Returns the players marked present, order preserved from input.
#[must_use]
pub fn present_of(roster: &[Player]) -> Vec<Player> {
    roster.iter().filter(|p| p.present).cloned().collect()
}

/// Case-insensitive substring filter on player names.
///
/// A blank or whitespace-only query returns the roster unchanged.
/// Order is preserved from input.
#[must_use]
pub fn filter_by_text(roster: &[Player], query: &str) -> Vec<Player> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return roster.to_vec();
    }
    roster
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlayerId;

    fn roster() -> Vec<Player> {
        [("Alice", true), ("Bob", false), ("Charly", true), ("Dora", true)]
            .into_iter()
            .enumerate()
            .map(|(i, (name, present))| Player {
                id: PlayerId::from(format!("id-{i}")),
                name: name.to_string(),
                present,
            })
            .collect()
    }

    #[test]
    fn present_of_keeps_input_order() {
        let names: Vec<String> = present_of(&roster()).into_iter().map(|p| p.name).collect();
        assert_eq!(names, ["Alice", "Charly", "Dora"]);
    }

    #[test]
    fn blank_query_is_identity() {
        let all = roster();
        assert_eq!(filter_by_text(&all, ""), all);
        assert_eq!(filter_by_text(&all, "   "), all);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let names: Vec<String> = filter_by_text(&roster(), "aR")
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["Charly"]);
    }

    #[test]
    fn filter_does_not_change_presence_derivation() {
        // Display composes filter then presence; the eligible set for a
        // draw stays the unfiltered present set.
        let all = roster();
        let visible = present_of(&filter_by_text(&all, "do"));
        assert_eq!(visible.len(), 1);
        assert_eq!(present_of(&all).len(), 3);
    }
}
