// src/engine/compare.rs
use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::table::TableBlock;

use super::normalize::{lookup, PlayerRecord};
use super::selection::TeamSelection;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    AGreater,
    BGreater,
    Equal,
}

impl Relation {
    pub fn of(a: f64, b: f64) -> Self {
        match a.partial_cmp(&b) {
            Some(Ordering::Greater) => Relation::AGreater,
            Some(Ordering::Less) => Relation::BGreater,
            _ => Relation::Equal,
        }
    }

    /// Same comparison seen from the other side.
    pub fn flip(self) -> Self {
        match self {
            Relation::AGreater => Relation::BGreater,
            Relation::BGreater => Relation::AGreater,
            Relation::Equal => Relation::Equal,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonRow {
    pub label: String,
    pub value_a: String,
    pub value_b: String,
    /// `None` only for the identity row (player names).
    pub relation: Option<Relation>,
}

impl ComparisonRow {
    pub fn is_identity(&self) -> bool { self.relation.is_none() }
}

fn field<'a>(rec: &'a PlayerRecord, i: usize) -> &'a str {
    rec.fields.get(i).map(String::as_str).unwrap_or("")
}

fn numeric(label: &str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| Error::NotNumeric { label: s!(label), value: s!(value) })
}

/// Row 0 pairs the names under `header[0]`; every later column is compared
/// numerically. Stat columns must be numeric: a non-numeric cell is
/// reported, not guessed around.
pub fn compare(a: &PlayerRecord, b: &PlayerRecord, header: &[String]) -> Result<Vec<ComparisonRow>> {
    let Some((id_label, stat_labels)) = header.split_first() else {
        return Ok(Vec::new());
    };

    let mut out = Vec::with_capacity(header.len());
    out.push(ComparisonRow {
        label: id_label.clone(),
        value_a: s!(field(a, 0)),
        value_b: s!(field(b, 0)),
        relation: None,
    });

    for (off, label) in stat_labels.iter().enumerate() {
        let i = off + 1;
        let (va, vb) = (field(a, i), field(b, i));
        let relation = Relation::of(numeric(label, va)?, numeric(label, vb)?);
        out.push(ComparisonRow {
            label: label.clone(),
            value_a: s!(va),
            value_b: s!(vb),
            relation: Some(relation),
        });
    }

    Ok(out)
}

/// Lookup both selected players and compare them from scratch.
pub fn compare_players(selection: &TeamSelection, stats: &TableBlock) -> Result<Vec<ComparisonRow>> {
    let a = lookup(&selection.first, stats);
    let b = lookup(&selection.second, stats);
    logd!(
        "Compare: {:?} ({}) vs {:?} ({})",
        a.name(), if a.recorded { "recorded" } else { "no games" },
        b.name(), if b.recorded { "recorded" } else { "no games" },
    );
    compare(&a, &b, &stats.header)
}
