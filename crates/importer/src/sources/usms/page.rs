use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

lazy_static! {
    static ref ELEMENT_SELECTOR: Selector =
        Selector::parse("h1, h2, h3, h4, table").expect("element selector is valid");
    static ref ROW_SELECTOR: Selector = Selector::parse("tr").expect("row selector is valid");
    static ref CELL_SELECTOR: Selector =
        Selector::parse("td, th").expect("cell selector is valid");
    static ref DATA_CELL_SELECTOR: Selector =
        Selector::parse("td").expect("data cell selector is valid");
}

/// A row of a results table, cells as trimmed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<String>,
    /// No `td` cells at all, only `th`.
    pub is_header: bool,
}

#[cfg(test)]
impl TableRow {
    pub(crate) fn data(cells: &[&str]) -> Self {
        Self {
            cells: cells.iter().map(|cell| cell.to_string()).collect(),
            is_header: false,
        }
    }
}

/// The parts of a results page the extractor cares about, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageElement {
    Heading(String),
    Table(Vec<TableRow>),
}

pub fn collect_elements(document: &Html) -> Vec<PageElement> {
    document
        .select(&ELEMENT_SELECTOR)
        .map(|element| match element.value().name() {
            "table" => PageElement::Table(table_rows(element)),
            _ => PageElement::Heading(element_text(element)),
        })
        .collect()
}

fn table_rows(table: ElementRef<'_>) -> Vec<TableRow> {
    table
        .select(&ROW_SELECTOR)
        .map(|row| TableRow {
            cells: row.select(&CELL_SELECTOR).map(element_text).collect(),
            is_header: row.select(&DATA_CELL_SELECTOR).next().is_none(),
        })
        .collect()
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
