// src/core/html.rs
//
// Thin helpers over `scraper` shared by every page spec.

use scraper::{ElementRef, Html, Selector};

use crate::error::{Error, Result};
use super::sanitize::normalize_ws;

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Selector { css: s!(css), reason: e.to_string() })
}

/// Rendered text of an element: descendant text nodes joined by a space
/// (`<br>` and block children separate words), whitespace collapsed.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<Vec<_>>().join(" "))
}

/// Text of every `css` match under `el`, in document order.
pub fn texts_in(el: ElementRef<'_>, css: &Selector) -> Vec<String> {
    el.select(css).map(text_of).collect()
}

/// Text of every `css` match in the whole document, in document order.
pub fn doc_texts(doc: &Html, css: &Selector) -> Vec<String> {
    doc.select(css).map(text_of).collect()
}

/// Heading cells of a table-like region: every `<th>`, document order.
pub fn heading_cells(region: ElementRef<'_>) -> Result<Vec<String>> {
    let th = selector("th")?;
    Ok(texts_in(region, &th))
}

/// Data rows of a table-like region: each `<tr>` that holds at least one
/// `<td>`, as the text of its cells. Heading-only rows are skipped.
pub fn data_rows(region: ElementRef<'_>) -> Result<Vec<Vec<String>>> {
    let tr = selector("tr")?;
    let td = selector("td")?;
    Ok(region
        .select(&tr)
        .map(|row| texts_in(row, &td))
        .filter(|cells| !cells.is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"
        <table>
          <thead><tr><th>Player</th><th> No </th></tr></thead>
          <tbody>
            <tr><td><a href="/p/1">Jayson
                Tatum</a></td><td>0</td></tr>
            <tr><td>Jaylen Brown</td><td>7</td></tr>
          </tbody>
        </table>"#;

    fn first_table(doc: &Html) -> ElementRef<'_> {
        doc.select(&selector("table").unwrap()).next().unwrap()
    }

    #[test]
    fn headings_and_rows_in_document_order() {
        let doc = Html::parse_document(TABLE);
        let t = first_table(&doc);
        assert_eq!(heading_cells(t).unwrap(), vec!["Player", "No"]);
        assert_eq!(
            data_rows(t).unwrap(),
            vec![vec!["Jayson Tatum", "0"], vec!["Jaylen Brown", "7"]]
        );
    }

    #[test]
    fn line_breaks_separate_words() {
        let doc = Html::parse_document("<table><tr><td>Jayson<br>Tatum</td><td>0</td></tr></table>");
        let rows = data_rows(first_table(&doc)).unwrap();
        assert_eq!(rows[0][0], "Jayson Tatum");
    }

    #[test]
    fn bad_selector_is_an_error() {
        assert!(matches!(selector("td[").unwrap_err(), Error::Selector { .. }));
    }
}
