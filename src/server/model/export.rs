use crate::model::api::string_enum;

/// Record kinds that can be exported as a spreadsheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportEntity {
    Owners,
    Tenants,
    Providers,
    Properties,
    Contracts,
    Issues,
    Offers,
}

string_enum!(ExportEntity, "export entity", {
    Owners => "owners",
    Tenants => "tenants",
    Providers => "providers",
    Properties => "properties",
    Contracts => "contracts",
    Issues => "issues",
    Offers => "offers",
});

/// A generated document ready to be sent as a download.
#[derive(Debug, Clone, PartialEq)]
pub struct Export {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Spreadsheet cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn optional(value: Option<impl Into<String>>) -> Self {
        value.map_or(Cell::Empty, |v| Cell::Text(v.into()))
    }

    /// Money column, written as a decimal amount.
    pub fn money(cents: i64) -> Self {
        Cell::Number(cents as f64 / 100.0)
    }
}

/// One worksheet: a bold header row followed by data rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, headers: Vec<&'static str>) -> Self {
        Self {
            name: name.into(),
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }
}

/// Content of a single-page PDF document.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfContent {
    pub title: String,
    /// Company name and contact lines printed above the title.
    pub header: Vec<String>,
    pub sections: Vec<PdfSection>,
}

/// Heading followed by label/value lines.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfSection {
    pub heading: String,
    pub lines: Vec<(String, String)>,
}

impl PdfSection {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            lines: Vec::new(),
        }
    }

    pub fn line(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.lines.push((label.into(), value.into()));
        self
    }
}
