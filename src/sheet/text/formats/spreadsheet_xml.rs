//! SpreadsheetML 2003 (XML Spreadsheet) writer.
//!
//! Produces the single-worksheet XML document that Excel opens from an `.xls`
//! file. The layout is fixed byte for byte:
//!
//! - XML declaration and `mso-application` processing instruction
//! - `Workbook` root carrying the default and `ss` namespaces
//! - one `Worksheet` named `Report` holding one `Table`
//! - a header `Row` followed by one `Row` per record

use crate::common::xml::escape_xml;
use crate::sheet::{CellType, CellValue, Dataset};

/// Name of the only worksheet in the workbook.
pub const WORKSHEET_NAME: &str = "Report";

const SPREADSHEET_NS: &str = "urn:schemas-microsoft-com:office:spreadsheet";

/// Encode a dataset as a SpreadsheetML document.
///
/// Returns `None` when the dataset is empty. Header cells are always
/// `String`; data cells are `Number` for numeric values and `String` for
/// everything else, with absent fields written as empty strings.
pub fn encode_spreadsheet(dataset: &Dataset) -> Option<String> {
    let header = dataset.header()?;

    let mut xml = String::with_capacity(256 + 48 * header.len() * (dataset.len() + 1));
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<?mso-application progid=\"Excel.Sheet\"?>\n");
    xml.push_str("<Workbook xmlns=\"");
    xml.push_str(SPREADSHEET_NS);
    xml.push_str("\"\n xmlns:ss=\"");
    xml.push_str(SPREADSHEET_NS);
    xml.push_str("\">\n");
    xml.push_str("<Worksheet ss:Name=\"");
    xml.push_str(WORKSHEET_NAME);
    xml.push_str("\">\n<Table>\n");

    xml.push_str("<Row>");
    for name in &header {
        push_cell(&mut xml, CellType::String, name);
    }
    xml.push_str("</Row>");

    for record in dataset {
        xml.push_str("<Row>");
        for value in record.values_for(&header) {
            let value = value.unwrap_or(&CellValue::Empty);
            push_cell(&mut xml, value.cell_type(), &value.to_text());
        }
        xml.push_str("</Row>");
    }

    xml.push_str("</Table></Worksheet></Workbook>");
    Some(xml)
}

fn push_cell(xml: &mut String, cell_type: CellType, text: &str) {
    xml.push_str("<Cell><Data ss:Type=\"");
    xml.push_str(cell_type.as_str());
    xml.push_str("\">");
    xml.push_str(&escape_xml(text));
    xml.push_str("</Data></Cell>");
}
