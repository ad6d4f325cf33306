//! Selected monsters and the running XP budget.
//!
//! The selection is an ordered list: the same monster can be picked several
//! times and each pick is its own entry. Entries are addressed by position.

/// A monster picked by the user from the results table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedMonster {
    pub id: String,
    pub name: String,
    pub xp: u32,
}

impl SelectedMonster {
    pub fn new(id: impl Into<String>, name: impl Into<String>, xp: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            xp,
        }
    }
}

/// Everything the budget panel displays, computed in one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetSummary {
    pub count: usize,
    pub xp_used: i64,
    pub remaining: i64,
}

impl BudgetSummary {
    /// True when the selection costs more than the budget allows.
    pub fn is_over_budget(&self) -> bool {
        self.remaining < 0
    }
}

/// The page's monster selection, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MonsterSelection {
    monsters: Vec<SelectedMonster>,
}

impl MonsterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a monster. Duplicates accumulate.
    pub fn add(&mut self, monster: SelectedMonster) {
        self.monsters.push(monster);
    }

    /// Remove the entry at `index`.
    ///
    /// Returns the removed monster, or `None` (leaving the selection
    /// untouched) when the index is out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<SelectedMonster> {
        if index < self.monsters.len() {
            Some(self.monsters.remove(index))
        } else {
            None
        }
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.monsters.clear();
    }

    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectedMonster> {
        self.monsters.iter()
    }

    /// Sum of XP over all selected entries.
    pub fn xp_used(&self) -> i64 {
        self.monsters.iter().map(|m| i64::from(m.xp)).sum()
    }

    /// Compute the panel figures against the given budget.
    pub fn summary(&self, budget: i64) -> BudgetSummary {
        let xp_used = self.xp_used();
        BudgetSummary {
            count: self.monsters.len(),
            xp_used,
            remaining: budget.saturating_sub(xp_used),
        }
    }
}

/// Parse the budget input's raw value.
///
/// Leading integer digits are honoured (`"1500.7"` -> 1500, `"  800xp"` -> 800);
/// anything without a leading number reads as 0. Values too large for `i64`
/// saturate instead of wrapping to 0.
pub fn parse_budget(raw: &str) -> i64 {
    let trimmed = raw.trim();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return 0;
    }
    match digits.parse::<i64>() {
        Ok(n) => sign * n,
        Err(_) if sign < 0 => i64::MIN,
        Err(_) => i64::MAX,
    }
}

/// Whether a swap replaced the results container.
///
/// The swap's own target (from the event detail) wins; the element the event
/// was dispatched on is the fallback when the detail has none.
pub fn is_result_swap(
    detail_target_id: Option<&str>,
    event_target_id: Option<&str>,
    container_id: &str,
) -> bool {
    detail_target_id
        .or(event_target_id)
        .is_some_and(|id| id == container_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goblin() -> SelectedMonster {
        SelectedMonster::new("goblin", "Goblin", 50)
    }

    fn ogre() -> SelectedMonster {
        SelectedMonster::new("ogre", "Ogre", 450)
    }

    #[test]
    fn test_add_accumulates_duplicates() {
        let mut selection = MonsterSelection::new();
        selection.add(goblin());
        selection.add(goblin());
        selection.add(ogre());

        assert_eq!(selection.len(), 3);
        assert_eq!(selection.xp_used(), 550);
        let names: Vec<_> = selection.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Goblin", "Goblin", "Ogre"]);
    }

    #[test]
    fn test_remove_by_position() {
        let mut selection = MonsterSelection::new();
        selection.add(goblin());
        selection.add(ogre());
        selection.add(goblin());

        assert_eq!(selection.remove(1), Some(ogre()));
        assert_eq!(selection.len(), 2);
        assert_eq!(selection.xp_used(), 100);
    }

    #[test]
    fn test_remove_out_of_bounds_is_noop() {
        let mut selection = MonsterSelection::new();
        assert_eq!(selection.remove(0), None);

        selection.add(ogre());
        assert_eq!(selection.remove(1), None);
        assert_eq!(selection.remove(usize::MAX), None);
        assert_eq!(selection.len(), 1);
        assert_eq!(selection.xp_used(), 450);
    }

    #[test]
    fn test_summary_tracks_surviving_entries() {
        let mut selection = MonsterSelection::new();
        let ops: [(bool, usize); 6] = [(true, 0), (true, 0), (false, 5), (true, 0), (false, 0), (false, 0)];
        let mut expected: Vec<u32> = Vec::new();

        for (add, index) in ops {
            if add {
                selection.add(ogre());
                expected.push(450);
            } else {
                selection.remove(index);
                if index < expected.len() {
                    expected.remove(index);
                }
            }
            let summary = selection.summary(1_000);
            assert_eq!(summary.count, expected.len());
            assert_eq!(summary.xp_used, expected.iter().map(|&xp| i64::from(xp)).sum::<i64>());
        }
    }

    #[test]
    fn test_summary_over_budget() {
        let mut selection = MonsterSelection::new();
        selection.add(ogre());
        selection.add(ogre());

        let summary = selection.summary(800);
        assert_eq!(summary.xp_used, 900);
        assert_eq!(summary.remaining, -100);
        assert!(summary.is_over_budget());

        let summary = selection.summary(900);
        assert_eq!(summary.remaining, 0);
        assert!(!summary.is_over_budget());
    }

    #[test]
    fn test_clear_empties_selection() {
        let mut selection = MonsterSelection::new();
        selection.add(goblin());
        selection.add(ogre());
        selection.clear();

        assert!(selection.is_empty());
        assert_eq!(selection.summary(300), BudgetSummary { count: 0, xp_used: 0, remaining: 300 });
    }

    #[test]
    fn test_parse_budget() {
        assert_eq!(parse_budget("1500"), 1500);
        assert_eq!(parse_budget(" 2200 "), 2200);
        assert_eq!(parse_budget("1500.7"), 1500);
        assert_eq!(parse_budget("800xp"), 800);
        assert_eq!(parse_budget("-50"), -50);
        assert_eq!(parse_budget("+75"), 75);
        assert_eq!(parse_budget(""), 0);
        assert_eq!(parse_budget("abc"), 0);
        assert_eq!(parse_budget("-"), 0);
    }

    #[test]
    fn test_parse_budget_saturates() {
        assert_eq!(parse_budget("99999999999999999999"), i64::MAX);
        assert_eq!(parse_budget("-99999999999999999999"), i64::MIN);

        let mut selection = MonsterSelection::new();
        selection.add(ogre());
        assert!(!selection.summary(parse_budget("99999999999999999999")).is_over_budget());
    }

    #[test]
    fn test_is_result_swap() {
        let container = "result-container";
        assert!(is_result_swap(Some(container), None, container));
        assert!(is_result_swap(None, Some(container), container));
        assert!(is_result_swap(Some(container), Some("monster-list"), container));
        assert!(!is_result_swap(Some("monster-list"), Some(container), container));
        assert!(!is_result_swap(None, None, container));
        assert!(!is_result_swap(Some(""), None, container));
    }

    #[test]
    fn test_result_swap_clears_selection() {
        let mut selection = MonsterSelection::new();
        selection.add(goblin());
        selection.add(ogre());

        if is_result_swap(Some("monster-list"), None, "result-container") {
            selection.clear();
        }
        assert_eq!(selection.len(), 2);

        if is_result_swap(Some("result-container"), None, "result-container") {
            selection.clear();
        }
        assert!(selection.is_empty());
    }
}
