//! Common utilities for XLSX reading tests.
//!
//! Fixtures are assembled in memory with `zip::ZipWriter`, so every test
//! states exactly which parts its archive contains.

use std::io::{Cursor, Write};

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/></Types>"#;

/// Builder for an in-memory XLSX archive
#[derive(Default)]
pub struct XlsxFixture {
    shared_strings: Option<Vec<String>>,
    raw_shared_strings: Option<Vec<String>>,
    sheets: Vec<(String, String)>,
    without_workbook: bool,
    missing_parts: Vec<String>,
}

#[allow(dead_code)]
impl XlsxFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shared strings table with the given entries
    pub fn shared_strings(mut self, strings: &[&str]) -> Self {
        self.shared_strings = Some(strings.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Add a shared strings table whose `<si>` bodies are given as raw markup
    pub fn raw_shared_strings(mut self, items: &[&str]) -> Self {
        self.raw_shared_strings = Some(items.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Add a worksheet whose `<sheetData>` holds the given rows markup
    pub fn sheet(mut self, name: &str, rows_xml: &str) -> Self {
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>{}</sheetData></worksheet>"#,
            rows_xml
        );
        self.sheets.push((name.to_string(), xml));
        self
    }

    /// Add a worksheet part with arbitrary content
    pub fn raw_sheet(mut self, name: &str, xml: &str) -> Self {
        self.sheets.push((name.to_string(), xml.to_string()));
        self
    }

    /// Leave out xl/workbook.xml and its relationships
    pub fn without_workbook(mut self) -> Self {
        self.without_workbook = true;
        self
    }

    /// List a sheet in the workbook but leave its part out of the archive
    pub fn missing_sheet_part(mut self, name: &str) -> Self {
        self.missing_parts.push(name.to_string());
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut buf = Vec::new();
        {
            let mut zip = zip::ZipWriter::new(Cursor::new(&mut buf));
            let options = zip::write::SimpleFileOptions::default();

            zip.start_file("[Content_Types].xml", options).unwrap();
            zip.write_all(CONTENT_TYPES.as_bytes()).unwrap();

            if !self.without_workbook {
                let mut sheets = String::new();
                let mut rels = String::new();
                for (i, (name, _)) in self.sheets.iter().enumerate() {
                    sheets.push_str(&format!(
                        r#"<sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
                        name,
                        i + 1,
                        i + 1
                    ));
                    rels.push_str(&format!(
                        r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{}.xml"/>"#,
                        i + 1,
                        i + 1
                    ));
                }

                zip.start_file("xl/workbook.xml", options).unwrap();
                write!(
                    zip,
                    r#"<?xml version="1.0" encoding="UTF-8"?><workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets>{}</sheets></workbook>"#,
                    sheets
                )
                .unwrap();

                zip.start_file("xl/_rels/workbook.xml.rels", options)
                    .unwrap();
                write!(
                    zip,
                    r#"<?xml version="1.0" encoding="UTF-8"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{}</Relationships>"#,
                    rels
                )
                .unwrap();
            }

            let entries = match (&self.shared_strings, &self.raw_shared_strings) {
                (Some(strings), _) => Some(
                    strings
                        .iter()
                        .map(|s| format!("<t xml:space=\"preserve\">{}</t>", s))
                        .collect::<Vec<_>>(),
                ),
                (None, Some(raw)) => Some(raw.clone()),
                (None, None) => None,
            };

            if let Some(strings) = &entries {
                let items: String = strings.iter().map(|s| format!("<si>{}</si>", s)).collect();
                zip.start_file("xl/sharedStrings.xml", options).unwrap();
                write!(
                    zip,
                    r#"<?xml version="1.0" encoding="UTF-8"?><sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="{0}" uniqueCount="{0}">{1}</sst>"#,
                    strings.len(),
                    items
                )
                .unwrap();
            }

            for (i, (name, xml)) in self.sheets.iter().enumerate() {
                if self.missing_parts.contains(name) {
                    continue;
                }
                zip.start_file(format!("xl/worksheets/sheet{}.xml", i + 1), options)
                    .unwrap();
                zip.write_all(xml.as_bytes()).unwrap();
            }

            zip.finish().unwrap();
        }
        buf
    }
}
