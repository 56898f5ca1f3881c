//! Minimal read-back helpers for generated files.
//!
//! Only understands the layout this crate writes: one classic xref section
//! starting at object 0 and a single-line trailer dictionary.

#![allow(dead_code)]

/// Find the first occurrence of `needle` in `haystack`.
pub fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Find the last occurrence of `needle` in `haystack`.
pub fn rfind_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).rposition(|w| w == needle)
}

pub fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    find_bytes(haystack, needle).is_some()
}

#[derive(Debug)]
pub struct XrefRecord {
    pub offset: usize,
    pub generation: u16,
    pub in_use: bool,
}

#[derive(Debug)]
pub struct FileLayout {
    pub startxref: usize,
    /// Indexed by object number; entry 0 is the free-list head.
    pub records: Vec<XrefRecord>,
    pub trailer_size: usize,
    pub root: u32,
}

fn parse_number(bytes: &[u8]) -> usize {
    std::str::from_utf8(bytes)
        .expect("ascii number")
        .trim()
        .parse()
        .expect("decimal number")
}

/// Read the trailer and cross-reference table back out of `bytes`.
pub fn read_layout(bytes: &[u8]) -> FileLayout {
    assert!(bytes.ends_with(b"%%EOF\n"), "file must end with %%EOF");

    let marker = rfind_bytes(bytes, b"startxref\n").expect("startxref present");
    let after = &bytes[marker + b"startxref\n".len()..];
    let line_end = find_bytes(after, b"\n").expect("startxref value line");
    let startxref = parse_number(&after[..line_end]);

    let xref = &bytes[startxref..];
    assert!(xref.starts_with(b"xref\n0 "), "startxref must point at xref");
    let header_end = find_bytes(xref, b"\n").unwrap() + 1;
    let count_end = header_end + find_bytes(&xref[header_end..], b"\n").unwrap();
    let count = parse_number(&xref[b"xref\n0 ".len()..count_end]);

    let mut records = Vec::with_capacity(count);
    let mut cursor = count_end + 1;
    for _ in 0..count {
        let record = &xref[cursor..cursor + 20];
        assert_eq!(&record[18..20], b" \n", "record must end with space + LF");
        records.push(XrefRecord {
            offset: parse_number(&record[0..10]),
            generation: parse_number(&record[11..16]) as u16,
            in_use: record[17] == b'n',
        });
        cursor += 20;
    }

    let trailer = &xref[cursor..];
    assert!(trailer.starts_with(b"trailer\n<< "), "trailer follows xref");
    let dict_end = find_bytes(trailer, b">>").unwrap();
    let dict = std::str::from_utf8(&trailer[..dict_end]).unwrap();

    FileLayout {
        startxref,
        records,
        trailer_size: dict_value(dict, "/Size").parse().unwrap(),
        root: dict_value(dict, "/Root").parse().unwrap(),
    }
}

fn dict_value<'a>(dict: &'a str, key: &str) -> &'a str {
    let start = dict.find(key).unwrap_or_else(|| panic!("{key} missing")) + key.len();
    dict[start..].split_whitespace().next().unwrap()
}

/// Bytes of object `number`, from its `N 0 obj` line through `endobj`.
pub fn object_at<'a>(bytes: &'a [u8], layout: &FileLayout, number: u32) -> &'a [u8] {
    let offset = layout.records[number as usize].offset;
    let rest = &bytes[offset..];
    let end = find_bytes(rest, b"endobj\n").expect("endobj") + b"endobj\n".len();
    &rest[..end]
}

/// Object number of the `N 0 R` reference following `key` inside `object`.
pub fn reference_after(object: &[u8], key: &str) -> Option<u32> {
    let start = find_bytes(object, key.as_bytes())? + key.len();
    let text = std::str::from_utf8(&object[start..]).ok()?;
    let text = text.trim_start().trim_start_matches('[');
    let mut parts = text.split_whitespace();
    let number = parts.next()?.parse().ok()?;
    let generation = parts.next()?;
    let marker = parts.next()?;
    (generation == "0" && marker.starts_with('R')).then_some(number)
}

/// Data between `stream\n` and `\nendstream` of a stream object, plus its `/Length`.
pub fn stream_parts(object: &[u8]) -> (usize, &[u8]) {
    let length_key = find_bytes(object, b"/Length ").expect("/Length") + b"/Length ".len();
    let length_end = length_key + find_bytes(&object[length_key..], b" ").unwrap();
    let length = parse_number(&object[length_key..length_end]);

    let data_start = find_bytes(object, b"stream\n").unwrap() + b"stream\n".len();
    let data_end = rfind_bytes(object, b"\nendstream").unwrap();
    (length, &object[data_start..data_end])
}

/// PDF literal-string unescaping for the three characters the writer escapes.
pub fn unescape_literal(escaped: &str) -> String {
    let mut result = String::with_capacity(escaped.len());
    let mut chars = escaped.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                result.push(next);
            }
        } else {
            result.push(c);
        }
    }
    result
}
