use ::scraper::{ElementRef, Html, Selector};

use crate::error::Result;
use crate::model::Row;
use crate::scraper::collapsed_text;

/// Turns a document into a sequence of [`Row`]s, one per `<tr>`.
///
/// Each row holds the text of its `<td>` cells. Header-only rows come out
/// empty and are left for the extractors to skip.
#[derive(Debug, Clone)]
pub struct RowTokenizer {
    row_selector: Selector,
    cell_selector: Selector,
}

impl RowTokenizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            row_selector: Selector::parse("tr")?,
            cell_selector: Selector::parse("td")?,
        })
    }

    /// Rows of every table in `document`, in document order.
    ///
    /// The iterator is lazy; calling this again starts over from the first row.
    pub fn rows<'a>(&'a self, document: &'a Html) -> impl Iterator<Item = Row> + 'a {
        self.rows_in(document.root_element())
    }

    /// Rows nested anywhere under `element`.
    pub fn rows_in<'a>(&'a self, element: ElementRef<'a>) -> impl Iterator<Item = Row> + 'a {
        element
            .select(&self.row_selector)
            .map(move |row| self.cells(&row))
    }

    fn cells(&self, row: &ElementRef) -> Row {
        row.select(&self.cell_selector)
            .map(|cell| collapsed_text(&cell))
            .collect()
    }
}
