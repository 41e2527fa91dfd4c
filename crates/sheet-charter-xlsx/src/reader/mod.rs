//! XLSX reader

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::{XlsxError, XlsxResult};
use sheet_charter_core::Grid;

/// Decode Excel's `_xHHHH_` escape sequences in strings.
///
/// Excel uses this format to encode special characters in XML:
/// - `_x000d_` = CR (carriage return)
/// - `_x000a_` = LF (line feed)
/// - `_x0009_` = Tab
/// - `_x005f_` = Underscore (escaped underscore)
fn decode_excel_escapes(s: &str) -> String {
    if !s.contains("_x") {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '_' {
            result.push(c);
            continue;
        }

        // Everything read while looking for an escape, in case it is not one
        let mut consumed = String::from("_");
        let mut decoded = None;

        if chars.peek() == Some(&'x') {
            chars.next();
            consumed.push('x');

            let mut hex_chars = String::new();
            while hex_chars.len() < 4 {
                match chars.peek() {
                    Some(&ch) if ch.is_ascii_hexdigit() => {
                        hex_chars.push(ch);
                        consumed.push(ch);
                        chars.next();
                    }
                    _ => break,
                }
            }

            if hex_chars.len() == 4 && chars.peek() == Some(&'_') {
                chars.next();
                consumed.push('_');
                decoded = u32::from_str_radix(&hex_chars, 16)
                    .ok()
                    .and_then(char::from_u32);
            }
        }

        match decoded {
            Some(ch) => result.push(ch),
            None => result.push_str(&consumed),
        }
    }

    result
}

/// Number of columns in a worksheet (`A` through `XFD`)
pub const MAX_COLS: usize = 16_384;

/// Convert the column letters of an A1-style reference to a 0-based index
///
/// `"A1"` is column 0, `"AB12"` is column 27. Returns `None` when the
/// reference has no leading letters or names a column past [`MAX_COLS`].
fn column_index(cell_ref: &str) -> Option<usize> {
    let letters = cell_ref
        .trim_start_matches('$')
        .bytes()
        .take_while(|b| b.is_ascii_alphabetic());

    let mut col = 0usize;
    for b in letters {
        col = col * 26 + (b.to_ascii_uppercase() - b'A') as usize + 1;
        if col > MAX_COLS {
            return None;
        }
    }

    col.checked_sub(1)
}

/// Raw state of one `<c>` element while it is being read
#[derive(Debug, Default)]
struct PendingCell {
    col: Option<usize>,
    cell_type: Option<String>,
    value: Option<String>,
}

impl PendingCell {
    fn from_start(e: &BytesStart<'_>) -> XlsxResult<Self> {
        let mut cell = PendingCell::default();
        for attr in e.attributes().flatten() {
            match attr.key.local_name().as_ref() {
                b"r" => {
                    let Ok(r) = attr.unescape_value() else {
                        continue;
                    };
                    match column_index(&r) {
                        Some(col) => cell.col = Some(col),
                        None => {
                            return Err(XlsxError::InvalidFormat(format!(
                                "Invalid cell reference '{}'",
                                r
                            )))
                        }
                    }
                }
                b"t" => {
                    cell.cell_type = attr.unescape_value().ok().map(|s| s.to_string());
                }
                _ => {}
            }
        }
        Ok(cell)
    }

    fn push_text(&mut self, text: &str) {
        self.value.get_or_insert_with(String::new).push_str(text);
    }
}

/// Resolve a cell to its display string
///
/// Shared-string cells are looked up in the table; every other cell keeps
/// its literal value. A cell that resolves to nothing is empty.
fn resolve_cell(cell_type: Option<&str>, value: Option<&str>, shared_strings: &[String]) -> String {
    let Some(value) = value else {
        return String::new();
    };

    match cell_type {
        Some("s") => {
            let resolved = value
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|idx| shared_strings.get(idx));
            match resolved {
                Some(s) => s.clone(),
                None => {
                    log::warn!(
                        "Shared string index '{}' does not resolve ({} strings in table)",
                        value,
                        shared_strings.len()
                    );
                    String::new()
                }
            }
        }
        Some("str") | Some("inlineStr") => decode_excel_escapes(value),
        _ => value.to_string(),
    }
}

/// Store a cell at its column, padding any gap with empty cells
fn place_cell(row: &mut Vec<String>, col: Option<usize>, value: String) {
    match col {
        Some(col) if col < row.len() => row[col] = value,
        Some(col) => {
            row.resize(col, String::new());
            row.push(value);
        }
        None => row.push(value),
    }
}

/// XLSX file reader
pub struct XlsxReader;

impl XlsxReader {
    /// Read a grid from a file path
    pub fn read_file<P: AsRef<Path>>(path: P) -> XlsxResult<Grid> {
        let file = File::open(path)?;
        Self::read(BufReader::new(file))
    }

    /// Read a grid from an in-memory archive
    pub fn read_bytes(bytes: &[u8]) -> XlsxResult<Grid> {
        Self::read(Cursor::new(bytes))
    }

    /// Read a grid from a reader
    ///
    /// Worksheets are tried in workbook order and the first one that can be
    /// read is returned; its first row becomes the grid header.
    pub fn read<R: Read + Seek>(reader: R) -> XlsxResult<Grid> {
        let mut archive = zip::ZipArchive::new(reader)?;

        // Verify this is an XLSX file
        if archive.by_name("[Content_Types].xml").is_err() {
            return Err(XlsxError::InvalidFormat(
                "Missing [Content_Types].xml".into(),
            ));
        }

        // Read shared strings (if present)
        let shared_strings = Self::read_shared_strings(&mut archive)?;

        for path in Self::worksheet_paths(&mut archive)? {
            match Self::read_worksheet(&mut archive, &path, &shared_strings) {
                Ok(records) => {
                    let grid = Grid::from_records(records);
                    log::debug!(
                        "Read worksheet {} with {} columns and {} data rows",
                        path,
                        grid.column_count(),
                        grid.row_count()
                    );
                    return Ok(grid);
                }
                Err(e) => log::warn!("Skipping unreadable worksheet {}: {}", path, e),
            }
        }

        Err(XlsxError::NoWorksheet)
    }

    /// Read the shared strings table
    ///
    /// Rich-text runs of one entry are concatenated. Phonetic hints are not
    /// part of the value and are dropped.
    fn read_shared_strings<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
    ) -> XlsxResult<Vec<String>> {
        let mut strings = Vec::new();

        let file = match archive.by_name("xl/sharedStrings.xml") {
            Ok(f) => f,
            Err(_) => return Ok(strings), // No shared strings is valid
        };

        let mut xml_reader = Reader::from_reader(BufReader::new(file));

        let mut buf = Vec::new();
        let mut current_string = String::new();
        let mut in_si = false;
        let mut in_t = false;
        let mut in_phonetic = false;

        loop {
            match xml_reader.read_event_into(&mut buf)? {
                Event::Start(e) => match e.local_name().as_ref() {
                    b"si" => {
                        in_si = true;
                        current_string.clear();
                    }
                    b"rPh" => in_phonetic = true,
                    b"t" if in_si && !in_phonetic => in_t = true,
                    _ => {}
                },
                Event::Empty(e) if e.local_name().as_ref() == b"si" => {
                    strings.push(String::new());
                }
                Event::End(e) => match e.local_name().as_ref() {
                    b"si" => {
                        strings.push(decode_excel_escapes(&current_string));
                        current_string.clear();
                        in_si = false;
                    }
                    b"rPh" => in_phonetic = false,
                    b"t" => in_t = false,
                    _ => {}
                },
                Event::Text(e) if in_t => {
                    if let Ok(text) = e.unescape() {
                        current_string.push_str(&text);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        log::debug!("Read {} shared strings", strings.len());
        Ok(strings)
    }

    /// Worksheet part paths, in workbook order
    ///
    /// Falls back to the `xl/worksheets/` parts in name order when the
    /// workbook or its relationships are missing.
    fn worksheet_paths<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
    ) -> XlsxResult<Vec<String>> {
        let listed = Self::read_workbook_xml(archive).and_then(|sheets| {
            let rels = Self::read_workbook_rels(archive)?;
            Ok(sheets
                .into_iter()
                .filter_map(|(name, r_id)| {
                    let path = rels.get(&r_id).cloned();
                    if path.is_none() {
                        log::warn!("Worksheet '{}' has no relationship target", name);
                    }
                    path
                })
                .collect::<Vec<_>>())
        });

        match listed {
            Ok(paths) => Ok(paths),
            Err(XlsxError::MissingPart(part)) => {
                log::debug!("{} is missing, scanning for worksheet parts", part);
                Ok(Self::scan_worksheet_parts(archive))
            }
            Err(e) => Err(e),
        }
    }

    fn scan_worksheet_parts<R: Read + Seek>(archive: &zip::ZipArchive<R>) -> Vec<String> {
        let mut paths: Vec<String> = archive
            .file_names()
            .filter(|name| {
                name.strip_prefix("xl/worksheets/")
                    .map_or(false, |rest| rest.ends_with(".xml") && !rest.contains('/'))
            })
            .map(str::to_string)
            .collect();
        // sheet2.xml before sheet10.xml
        paths.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        paths
    }

    /// Read workbook.xml to get sheet names and rIds
    fn read_workbook_xml<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
    ) -> XlsxResult<Vec<(String, String)>> {
        let file = archive
            .by_name("xl/workbook.xml")
            .map_err(|_| XlsxError::MissingPart("xl/workbook.xml".into()))?;

        let mut xml_reader = Reader::from_reader(BufReader::new(file));
        xml_reader.trim_text(true);

        let mut buf = Vec::new();
        let mut sheets = Vec::new();

        loop {
            match xml_reader.read_event_into(&mut buf)? {
                Event::Empty(e) | Event::Start(e) if e.local_name().as_ref() == b"sheet" => {
                    let mut name = None;
                    let mut r_id = None;

                    for attr in e.attributes().flatten() {
                        match attr.key.local_name().as_ref() {
                            b"name" => {
                                name = attr.unescape_value().ok().map(|s| s.to_string());
                            }
                            b"id" => {
                                r_id = attr.unescape_value().ok().map(|s| s.to_string());
                            }
                            _ => {}
                        }
                    }

                    if let (Some(name), Some(r_id)) = (name, r_id) {
                        sheets.push((name, r_id));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(sheets)
    }

    /// Read workbook.xml.rels to get worksheet file paths by rId
    fn read_workbook_rels<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
    ) -> XlsxResult<HashMap<String, String>> {
        let file = archive
            .by_name("xl/_rels/workbook.xml.rels")
            .map_err(|_| XlsxError::MissingPart("xl/_rels/workbook.xml.rels".into()))?;

        let mut xml_reader = Reader::from_reader(BufReader::new(file));
        xml_reader.trim_text(true);

        let mut buf = Vec::new();
        let mut rels = HashMap::new();

        loop {
            match xml_reader.read_event_into(&mut buf)? {
                Event::Empty(e) | Event::Start(e)
                    if e.local_name().as_ref() == b"Relationship" =>
                {
                    let mut id = None;
                    let mut target = None;
                    let mut rel_type = None;

                    for attr in e.attributes().flatten() {
                        match attr.key.as_ref() {
                            b"Id" => id = attr.unescape_value().ok().map(|s| s.to_string()),
                            b"Target" => {
                                target = attr.unescape_value().ok().map(|s| s.to_string())
                            }
                            b"Type" => {
                                rel_type = attr.unescape_value().ok().map(|s| s.to_string())
                            }
                            _ => {}
                        }
                    }

                    // Only worksheet relationships; targets are relative to xl/
                    if let (Some(id), Some(target), Some(rel_type)) = (id, target, rel_type) {
                        if rel_type.ends_with("/worksheet") {
                            let full_path = match target.strip_prefix('/') {
                                Some(absolute) => absolute.to_string(),
                                None => format!("xl/{}", target),
                            };
                            rels.insert(id, full_path);
                        }
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(rels)
    }

    /// Read the rows of a worksheet as raw string records
    ///
    /// Rows come back in document order. Rows without any cell carry only
    /// formatting and are skipped.
    fn read_worksheet<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
        path: &str,
        shared_strings: &[String],
    ) -> XlsxResult<Vec<Vec<String>>> {
        let file = archive
            .by_name(path)
            .map_err(|_| XlsxError::MissingPart(path.to_string()))?;

        let mut xml_reader = Reader::from_reader(BufReader::new(file));

        let mut buf = Vec::new();
        let mut records = Vec::new();
        let mut saw_worksheet = false;

        let mut current_row: Option<Vec<String>> = None;
        let mut current_cell: Option<PendingCell> = None;
        let mut in_value = false;
        let mut in_inline_str = false;
        let mut in_inline_text = false;
        let mut in_phonetic = false;

        loop {
            match xml_reader.read_event_into(&mut buf)? {
                Event::Start(e) => match e.local_name().as_ref() {
                    b"worksheet" => saw_worksheet = true,
                    b"row" => current_row = Some(Vec::new()),
                    b"c" => current_cell = Some(PendingCell::from_start(&e)?),
                    b"v" if current_cell.is_some() => in_value = true,
                    b"is" if current_cell.is_some() => in_inline_str = true,
                    b"rPh" if in_inline_str => in_phonetic = true,
                    b"t" if in_inline_str && !in_phonetic => in_inline_text = true,
                    _ => {}
                },
                Event::Empty(e) => {
                    if e.local_name().as_ref() == b"c" {
                        // Cell with style only; it still occupies its column
                        if let Some(row) = current_row.as_mut() {
                            let cell = PendingCell::from_start(&e)?;
                            place_cell(row, cell.col, String::new());
                        }
                    }
                }
                Event::Text(e) => {
                    if in_value || in_inline_text {
                        if let (Some(cell), Ok(text)) = (current_cell.as_mut(), e.unescape()) {
                            cell.push_text(&text);
                        }
                    }
                }
                Event::End(e) => match e.local_name().as_ref() {
                    b"c" => {
                        if let (Some(cell), Some(row)) = (current_cell.take(), current_row.as_mut())
                        {
                            let value = resolve_cell(
                                cell.cell_type.as_deref(),
                                cell.value.as_deref(),
                                shared_strings,
                            );
                            place_cell(row, cell.col, value);
                        }
                    }
                    b"row" => {
                        if let Some(row) = current_row.take() {
                            if !row.is_empty() {
                                records.push(row);
                            }
                        }
                    }
                    b"v" => in_value = false,
                    b"is" => in_inline_str = false,
                    b"rPh" => in_phonetic = false,
                    b"t" => in_inline_text = false,
                    b"sheetData" => break,
                    _ => {}
                },
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if !saw_worksheet {
            return Err(XlsxError::InvalidFormat(format!(
                "{} is not a worksheet part",
                path
            )));
        }

        Ok(records)
    }
}
