// src/table.rs
//! Extraction shapes shared by scraping, comparison and display.
//!
//! - `TableBlock`: header + rows from a tabular region. Every row is exactly
//!   as long as the header; short rows are padded with `""`, cells past the
//!   header are dropped.
//! - `GroupedList`: titles + one group of free-text entries per title, from
//!   a list region (coaching staff, news, awards).
//!
//! Both are built once per fetch and only read afterwards.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableBlock {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableBlock {
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = header.len();
        let rows = rows
            .into_iter()
            .map(|mut r| {
                r.resize(width, s!());
                r
            })
            .collect();
        Self { header, rows }
    }

    pub fn ncols(&self) -> usize { self.header.len() }
    pub fn nrows(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// First field of every row (player names for roster/stat tables).
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().filter_map(|r| r.first()).map(String::as_str)
    }

    /// Keep only the leading `n` columns (roster pickers show three).
    pub fn leading_columns(&self, n: usize) -> TableBlock {
        let n = n.min(self.ncols());
        TableBlock {
            header: self.header[..n].to_vec(),
            rows: self.rows.iter().map(|r| r[..n].to_vec()).collect(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupedList {
    pub titles: Vec<String>,
    pub groups: Vec<Vec<String>>,
}

impl GroupedList {
    pub fn new(titles: Vec<String>, mut groups: Vec<Vec<String>>) -> Self {
        groups.resize(titles.len(), Vec::new());
        Self { titles, groups }
    }

    pub fn len(&self) -> usize { self.titles.len() }
    pub fn is_empty(&self) -> bool { self.titles.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.titles.iter().map(String::as_str).zip(self.groups.iter().map(Vec::as_slice))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(xs: &[&str]) -> Vec<String> { xs.iter().map(|x| s!(*x)).collect() }

    #[test]
    fn rows_are_aligned_to_header() {
        let t = TableBlock::new(
            v(&["PLAYER", "NO", "POS"]),
            vec![v(&["A"]), v(&["B", "1", "G", "extra"])],
        );
        assert_eq!(t.rows[0], v(&["A", "", ""]));
        assert_eq!(t.rows[1], v(&["B", "1", "G"]));
        assert!(t.rows.iter().all(|r| r.len() == t.ncols()));
    }

    #[test]
    fn leading_columns_clamps() {
        let t = TableBlock::new(v(&["P", "N"]), vec![v(&["A", "1"])]);
        assert_eq!(t.leading_columns(3), t);
        assert_eq!(t.leading_columns(1).rows, vec![v(&["A"])]);
    }

    #[test]
    fn groups_follow_titles() {
        let g = GroupedList::new(v(&["Head Coach", "Assistant Coaches"]), vec![v(&["Joe"])]);
        assert_eq!(g.groups.len(), 2);
        let pairs: Vec<_> = g.iter().collect();
        assert_eq!(pairs[1], ("Assistant Coaches", &[][..]));
    }
}
