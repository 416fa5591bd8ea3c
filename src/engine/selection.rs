// src/engine/selection.rs
use crate::table::TableBlock;

/// Which picker a selection event came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    First,
    Second,
}

/// The two players currently compared on the Player Stats tab.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamSelection {
    pub first: String,
    pub second: String,
}

impl TeamSelection {
    /// First two roster entries. A one-player roster fills both slots with
    /// the same name; an empty roster has nothing to select.
    pub fn from_roster(roster: &TableBlock) -> Option<Self> {
        let mut names = roster.keys();
        let first = names.next()?;
        let second = names.next().unwrap_or(first);
        Some(Self { first: s!(first), second: s!(second) })
    }

    /// New selection with `slot` replaced.
    pub fn with(self, slot: Slot, name: &str) -> Self {
        match slot {
            Slot::First => Self { first: s!(name), ..self },
            Slot::Second => Self { second: s!(name), ..self },
        }
    }

    pub fn get(&self, slot: Slot) -> &str {
        match slot {
            Slot::First => &self.first,
            Slot::Second => &self.second,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(names: &[&str]) -> TableBlock {
        TableBlock::new(
            vec![s!("PLAYER"), s!("#")],
            names.iter().map(|n| vec![s!(*n), s!("0")]).collect(),
        )
    }

    #[test]
    fn defaults_to_first_two() {
        let sel = TeamSelection::from_roster(&roster(&["A", "B", "C"])).unwrap();
        assert_eq!((sel.first.as_str(), sel.second.as_str()), ("A", "B"));
    }

    #[test]
    fn single_player_roster_selects_twice() {
        let sel = TeamSelection::from_roster(&roster(&["Solo"])).unwrap();
        assert_eq!(sel.first, sel.second);
        assert!(TeamSelection::from_roster(&roster(&[])).is_none());
    }

    #[test]
    fn with_replaces_one_slot() {
        let sel = TeamSelection::from_roster(&roster(&["A", "B", "C"])).unwrap();
        let sel = sel.with(Slot::Second, "C");
        assert_eq!(sel.get(Slot::First), "A");
        assert_eq!(sel.get(Slot::Second), "C");
        let sel = sel.with(Slot::First, "C");
        assert_eq!(sel.first, "C");
    }
}
