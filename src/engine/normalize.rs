// src/engine/normalize.rs
use crate::table::TableBlock;

/// One player's row of a stats table, or the zero-filled stand-in for a
/// player with no recorded games.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerRecord {
    pub fields: Vec<String>,
    /// `false` when synthesized by [`lookup`].
    pub recorded: bool,
}

impl PlayerRecord {
    pub fn name(&self) -> &str {
        self.fields.first().map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize { self.fields.len() }
    pub fn is_empty(&self) -> bool { self.fields.is_empty() }

    /// `[name, "0", "0", …]` with `width` fields in total.
    pub fn zero_filled(name: &str, width: usize) -> Self {
        let mut fields = Vec::with_capacity(width.max(1));
        fields.push(s!(name));
        fields.extend(std::iter::repeat_n(s!("0"), width.saturating_sub(1)));
        Self { fields, recorded: false }
    }
}

/// Exact, case-sensitive match on the first field of each row.
/// A miss is not an error: rookies and inactive players have no stats yet.
pub fn lookup(player_name: &str, stats: &TableBlock) -> PlayerRecord {
    match stats.rows.iter().find(|r| r.first().is_some_and(|n| n == player_name)) {
        Some(row) => PlayerRecord { fields: row.clone(), recorded: true },
        None => {
            logd!("Lookup: {player_name:?} has no stats row, zero-filling");
            PlayerRecord::zero_filled(player_name, stats.ncols())
        }
    }
}
