// src/cli.rs
//
// Headless front end over the same pipeline the GUI uses.
//
//   cli --list-teams
//   cli --team "Boston Celtics" [--format tsv]
//   cli --team celtics --compare "Jayson Tatum" "Jaylen Brown"

use std::env;
use std::io::{self, Write};
use std::path::Path;

use crate::{
    config::{consts::SETTINGS_FILE, settings},
    directory,
    engine::{self, Relation, TeamSelection},
    error::Error,
    progress::StderrProgress,
    scrape::{self, TeamData},
    specs::lists,
    table::{GroupedList, TableBlock},
};

const HELP: &str = "\
Usage:
  cli --list-teams
  cli --team <name|slug> [--format csv|tsv]
  cli --team <name|slug> --compare <player A> <player B>

Options:
  -t, --team <T>       Team display name (\"Boston Celtics\") or slug (\"celtics\")
  -c, --compare <A> <B>  Compare two players of the team
  -f, --format <F>     csv (default) or tsv
  -l, --list-teams     Print divisions and teams
  -h, --help           This text";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delim {
    Csv,
    Tsv,
}

impl Delim {
    pub fn sep(self) -> char {
        match self { Delim::Csv => ',', Delim::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub list_teams: bool,
    pub team: Option<String>,
    pub compare: Option<(String, String)>,
    pub format: Delim,
    pub help: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self { list_teams: false, team: None, compare: None, format: Delim::Csv, help: false }
    }
}

pub fn run() -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let params = parse_args(env::args().skip(1))?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if params.help {
        writeln!(out, "{HELP}")?;
        return Ok(());
    }
    if params.list_teams {
        write_directory(&mut out)?;
        return Ok(());
    }

    let Some(query) = params.team.as_deref() else {
        return Err("Specify --team <name> or --list-teams (see --help)".into());
    };
    let team = directory::find(query).ok_or_else(|| Error::ResourceNotFound {
        resource: "team id",
        locator: s!(query),
    })?;

    let opts = settings::load(Path::new(SETTINGS_FILE))?;
    crate::log::init(&opts.log_file);
    let mut progress = StderrProgress::new();
    let data = scrape::load_live(&opts.scrape, team.slug, Some(&mut progress))?;

    match &params.compare {
        Some((a, b)) => {
            let sel = TeamSelection { first: a.clone(), second: b.clone() };
            write_comparison(&mut out, &sel, &data.player_stats, params.format.sep())?;
        }
        None => write_team(&mut out, team.name, &data, params.format.sep())?,
    }
    out.flush()?;
    Ok(())
}

pub fn parse_args<I>(args: I) -> std::result::Result<Params, String>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "-l" | "--list-teams" => params.list_teams = true,
            "-t" | "--team" => params.team = Some(args.next().ok_or("Missing value for --team")?),
            "-c" | "--compare" => {
                let first = args.next().ok_or("--compare needs two player names")?;
                let second = args.next().ok_or("--compare needs two player names")?;
                params.compare = Some((first, second));
            }
            "-f" | "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => Delim::Csv,
                    "tsv" => Delim::Tsv,
                    other => return Err(format!("Unknown format: {other}")),
                };
            }
            "-h" | "--help" => params.help = true,
            _ => return Err(format!("Unknown arg: {a}")),
        }
    }

    if params.compare.is_some() && params.team.is_none() {
        return Err(s!("--compare requires --team"));
    }
    Ok(params)
}

/* ---------------- Output ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write one delimited row; fields are quoted only when they need it.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 { write!(w, "{sep}")?; }
        let cell = cell.as_ref();
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)
}

fn write_table<W: Write>(w: &mut W, title: &str, t: &TableBlock, sep: char) -> io::Result<()> {
    writeln!(w, "# {title}")?;
    write_row(&mut *w, &t.header, sep)?;
    for r in &t.rows {
        write_row(&mut *w, r, sep)?;
    }
    writeln!(w)
}

fn write_groups<W: Write>(w: &mut W, title: &str, g: &GroupedList, sep: char) -> io::Result<()> {
    writeln!(w, "# {title}")?;
    for (heading, entries) in g.iter() {
        let mut row = vec![heading];
        row.extend(entries.iter().map(String::as_str));
        write_row(&mut *w, &row, sep)?;
    }
    writeln!(w)
}

pub fn write_team<W: Write>(w: &mut W, name: &str, data: &TeamData, sep: char) -> io::Result<()> {
    writeln!(w, "## {name}")?;
    write_table(w, "Roster", &data.roster, sep)?;
    write_groups(w, "Coaching staff", &data.coaching, sep)?;

    writeln!(w, "# Team updates")?;
    for u in lists::updates(&data.updates) {
        write_row(&mut *w, &[u.date, u.headline, u.content], sep)?;
    }
    writeln!(w)?;

    write_table(w, "Player stats", &data.player_stats, sep)?;
    write_table(w, "Overall team stats", &data.overall_stats, sep)?;
    write_table(w, "Retired numbers", &data.retired_numbers, sep)?;
    write_table(w, "Hall of fame", &data.hall_of_fame, sep)?;
    write_table(w, "All-time records", &data.all_time, sep)?;
    write_groups(w, "Achievements", &data.achievements, sep)
}

fn relation_mark(rel: Option<Relation>) -> &'static str {
    match rel {
        None => "",
        Some(Relation::AGreater) => ">",
        Some(Relation::BGreater) => "<",
        Some(Relation::Equal) => "=",
    }
}

pub fn write_comparison<W: Write>(
    w: &mut W,
    sel: &TeamSelection,
    stats: &TableBlock,
    sep: char,
) -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rows = engine::compare_players(sel, stats)?;
    for r in &rows {
        write_row(&mut *w, &[r.label.as_str(), r.value_a.as_str(), relation_mark(r.relation), r.value_b.as_str()], sep)?;
    }
    Ok(())
}

pub fn write_directory<W: Write>(w: &mut W) -> io::Result<()> {
    for div in directory::divisions() {
        writeln!(w, "{}:", div.name)?;
        for t in &div.teams {
            writeln!(w, "  {:<24} {:<13} {}", t.name, t.slug, t.id)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(xs: &[&str]) -> Vec<String> { xs.iter().map(|x| s!(*x)).collect() }

    #[test]
    fn parses_team_compare_and_format() {
        let p = parse_args(args(&["-t", "celtics", "--compare", "A B", "C", "--format", "TSV"])).unwrap();
        assert_eq!(p.team.as_deref(), Some("celtics"));
        assert_eq!(p.compare, Some((s!("A B"), s!("C"))));
        assert_eq!(p.format, Delim::Tsv);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_args(args(&["--compare", "A", "B"])).is_err());
        assert!(parse_args(args(&["--team"])).is_err());
        assert!(parse_args(args(&["--format", "xml"])).is_err());
        assert!(parse_args(args(&["--bogus"])).is_err());
    }

    #[test]
    fn rows_quote_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["Tatum, Jayson", "26.9", "say \"hi\""], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "\"Tatum, Jayson\",26.9,\"say \"\"hi\"\"\"\n");

        let mut buf = Vec::new();
        write_row(&mut buf, &["Tatum, Jayson", "26.9"], '\t').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Tatum, Jayson\t26.9\n");
    }

    #[test]
    fn comparison_marks_relations() {
        let stats = TableBlock::new(
            args(&["PLAYER", "PTS", "AST"]),
            vec![args(&["Alice", "20", "7"]), args(&["Bob", "18", "9"])],
        );
        let sel = TeamSelection { first: s!("Alice"), second: s!("Bob") };
        let mut buf = Vec::new();
        write_comparison(&mut buf, &sel, &stats, ',').unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "PLAYER,Alice,,Bob\nPTS,20,>,18\nAST,7,<,9\n"
        );
    }
}
