//! Spreadsheet export.
//!
//! Rows are written into a minimal SpreadsheetML (`.xlsx`) package: one
//! worksheet, a header row, inline strings for text and plain numeric cells
//! for numbers. Values are written as given, without rounding.

use std::io::{Cursor, Write};

use contracts::domain::a005_order::{OrderExportRow, EXPORT_HEADERS};
use contracts::shared::Decimal;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export")]
    Empty,
    #[error("failed to build workbook: {0}")]
    Package(String),
    #[error("browser download failed: {0}")]
    Browser(String),
}

/// One spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    /// Numeric text written verbatim into a number cell.
    Number(String),
}

impl Cell {
    /// Number cell when the decimal parses, text cell otherwise.
    pub fn decimal(value: &Decimal) -> Self {
        match value.to_f64() {
            Some(n) if n.is_finite() => Cell::Number(value.as_str().trim().to_string()),
            _ => Cell::Text(value.as_str().to_string()),
        }
    }
}

/// Types that can be exported as spreadsheet rows.
pub trait ExcelExportable {
    fn headers() -> Vec<&'static str>;

    fn to_row(&self) -> Vec<Cell>;
}

impl ExcelExportable for OrderExportRow {
    fn headers() -> Vec<&'static str> {
        EXPORT_HEADERS.to_vec()
    }

    fn to_row(&self) -> Vec<Cell> {
        vec![
            Cell::Text(self.customer.clone()),
            Cell::Text(self.product.clone()),
            Cell::decimal(&self.quantity),
            Cell::Text(self.unit.clone()),
            Cell::decimal(&self.unit_price),
            Cell::decimal(&self.total),
            Cell::Text(self.date.clone()),
            Cell::Text(self.time.clone()),
        ]
    }
}

/// Build the workbook and hand it to the browser as a download.
pub fn export_to_excel<T: ExcelExportable>(
    data: &[T],
    sheet_name: &str,
    filename: &str,
) -> Result<(), ExportError> {
    if data.is_empty() {
        return Err(ExportError::Empty);
    }
    let bytes = build_workbook(data, sheet_name)?;
    let blob = create_xlsx_blob(&bytes)?;
    download_blob(&blob, filename)
}

pub fn build_workbook<T: ExcelExportable>(
    data: &[T],
    sheet_name: &str,
) -> Result<Vec<u8>, ExportError> {
    let sheet = sheet_xml(&T::headers(), data.iter().map(|row| row.to_row()));
    let parts = [
        ("[Content_Types].xml", CONTENT_TYPES.to_string()),
        ("_rels/.rels", ROOT_RELS.to_string()),
        ("xl/workbook.xml", workbook_xml(sheet_name)),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS.to_string()),
        ("xl/worksheets/sheet1.xml", sheet),
    ];

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for (name, content) in parts {
        zip.start_file(name, options)
            .map_err(|e| ExportError::Package(e.to_string()))?;
        zip.write_all(content.as_bytes())
            .map_err(|e| ExportError::Package(e.to_string()))?;
    }
    let cursor = zip
        .finish()
        .map_err(|e| ExportError::Package(e.to_string()))?;
    Ok(cursor.into_inner())
}

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;

fn workbook_xml(sheet_name: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="{}" sheetId="1" r:id="rId1"/></sheets></workbook>"#,
        escape_xml(sheet_name)
    )
}

fn sheet_xml(headers: &[&str], rows: impl Iterator<Item = Vec<Cell>>) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
    );

    let header_cells: Vec<Cell> = headers.iter().map(|h| Cell::Text(h.to_string())).collect();
    write_row(&mut xml, 1, &header_cells);
    for (i, cells) in rows.enumerate() {
        write_row(&mut xml, i + 2, &cells);
    }

    xml.push_str("</sheetData></worksheet>");
    xml
}

fn write_row(xml: &mut String, row: usize, cells: &[Cell]) {
    xml.push_str(&format!(r#"<row r="{}">"#, row));
    for (col, cell) in cells.iter().enumerate() {
        let reference = format!("{}{}", column_letter(col), row);
        match cell {
            Cell::Text(text) => xml.push_str(&format!(
                r#"<c r="{}" t="inlineStr"><is><t xml:space="preserve">{}</t></is></c>"#,
                reference,
                escape_xml(text)
            )),
            Cell::Number(number) => xml.push_str(&format!(
                r#"<c r="{}"><v>{}</v></c>"#,
                reference,
                escape_xml(number)
            )),
        }
    }
    xml.push_str("</row>");
}

/// Zero-based column index to its letter name: 0 -> A, 25 -> Z, 26 -> AA.
pub fn column_letter(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

fn escape_xml(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

fn create_xlsx_blob(bytes: &[u8]) -> Result<Blob, ExportError> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(XLSX_MIME);

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| ExportError::Browser(format!("failed to create blob: {:?}", e)))
}

/// Download `blob` through a temporary anchor element.
fn download_blob(blob: &Blob, filename: &str) -> Result<(), ExportError> {
    let browser = |msg: &str| ExportError::Browser(msg.to_string());

    let window = web_sys::window().ok_or_else(|| browser("no window object"))?;
    let document = window.document().ok_or_else(|| browser("no document object"))?;
    let body = document.body().ok_or_else(|| browser("no body element"))?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| ExportError::Browser(format!("failed to create object URL: {:?}", e)))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| ExportError::Browser(format!("failed to create anchor: {:?}", e)))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| ExportError::Browser(format!("failed to cast to anchor: {:?}", e)))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| ExportError::Browser(format!("failed to set style: {:?}", e)))?;

    body.append_child(&anchor)
        .map_err(|e| ExportError::Browser(format!("failed to append anchor: {:?}", e)))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| ExportError::Browser(format!("failed to remove anchor: {:?}", e)))?;

    Url::revoke_object_url(&url)
        .map_err(|e| ExportError::Browser(format!("failed to revoke URL: {:?}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn row(product: &str, quantity: &str, unit_price: &str, total: &str) -> OrderExportRow {
        OrderExportRow {
            customer: "ali".into(),
            product: product.into(),
            quantity: Decimal::new(quantity),
            unit: "kg".into(),
            unit_price: Decimal::new(unit_price),
            total: Decimal::new(total),
            date: "15.03.2025".into(),
            time: "14:02:26".into(),
        }
    }

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut part = archive.by_name(name).unwrap();
        let mut text = String::new();
        part.read_to_string(&mut text).unwrap();
        text
    }

    #[test]
    fn test_column_letters() {
        assert_eq!(column_letter(0), "A");
        assert_eq!(column_letter(7), "H");
        assert_eq!(column_letter(25), "Z");
        assert_eq!(column_letter(26), "AA");
        assert_eq!(column_letter(27), "AB");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("Tom & \"Jerry\" <x>"), "Tom &amp; &quot;Jerry&quot; &lt;x&gt;");
    }

    #[test]
    fn test_workbook_has_header_and_one_row_per_item() {
        let rows = vec![
            row("Olma", "2", "12.50", "25.00"),
            row("Sut", "1.5", "8000", "12000"),
        ];
        let bytes = build_workbook(&rows, "Orders").unwrap();

        let sheet = read_part(&bytes, "xl/worksheets/sheet1.xml");
        assert_eq!(sheet.matches("<row ").count(), 3);
        assert!(sheet.contains(r#"<c r="A1" t="inlineStr"><is><t xml:space="preserve">Customer</t></is></c>"#));
        assert!(sheet.contains(r#"<c r="H1" t="inlineStr"><is><t xml:space="preserve">Time</t></is></c>"#));
        assert!(sheet.contains(r#"<c r="C2"><v>2</v></c>"#));
        assert!(sheet.contains(r#"<c r="E2"><v>12.50</v></c>"#));
        assert!(sheet.contains(r#"<c r="F3"><v>12000</v></c>"#));
        assert!(sheet.contains("15.03.2025"));
        assert!(sheet.contains("14:02:26"));

        let workbook = read_part(&bytes, "xl/workbook.xml");
        assert!(workbook.contains(r#"<sheet name="Orders""#));
        assert!(read_part(&bytes, "[Content_Types].xml").contains("/xl/worksheets/sheet1.xml"));
    }

    #[test]
    fn test_non_numeric_decimal_is_text() {
        assert_eq!(Cell::decimal(&Decimal::new("abc")), Cell::Text("abc".into()));
        assert_eq!(Cell::decimal(&Decimal::new("NaN")), Cell::Text("NaN".into()));
        assert_eq!(Cell::decimal(&Decimal::new("3.5")), Cell::Number("3.5".into()));
    }

    #[test]
    fn test_empty_export_is_rejected() {
        let rows: Vec<OrderExportRow> = Vec::new();
        assert!(matches!(
            export_to_excel(&rows, "Orders", "x.xlsx"),
            Err(ExportError::Empty)
        ));
    }
}
