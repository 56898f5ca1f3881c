use crate::content::format_number;
use crate::document::ObjectGraph;
use crate::error::{PdfError, Result};
use crate::objects::{Object, ObjectId};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Serializes objects to any `Write` target while tracking byte offsets for
/// the cross-reference table.
///
/// `current_position` is a running count of bytes written so far; each object's
/// offset is taken from it before the object is appended.
pub struct PdfWriter<W: Write> {
    writer: W,
    object_table: Vec<(ObjectId, u64)>,
    current_position: u64,
}

impl<W: Write> PdfWriter<W> {
    pub fn new_with_writer(writer: W) -> Self {
        Self {
            writer,
            object_table: Vec::new(),
            current_position: 0,
        }
    }

    /// Write the whole file for `graph`: header, objects, xref, trailer.
    pub fn write_document(&mut self, graph: &ObjectGraph) -> Result<()> {
        self.write_header()?;

        for (id, object) in graph.objects() {
            self.write_object(*id, object)?;
        }

        let xref_position = self.current_position;
        self.write_xref()?;
        self.write_trailer(graph.root(), xref_position)?;

        self.writer.flush()?;
        Ok(())
    }

    pub fn write_header(&mut self) -> Result<()> {
        self.write_bytes(b"%PDF-1.4\n")?;
        // Binary comment to ensure file is treated as binary
        self.write_bytes(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n'])?;
        Ok(())
    }

    /// Write one indirect object and record where it starts.
    ///
    /// Object numbers must arrive in sequence starting at 1.
    pub fn write_object(&mut self, id: ObjectId, object: &Object) -> Result<()> {
        let expected = self.object_table.len() as u32 + 1;
        if id.number() != expected || id.generation() != 0 {
            return Err(PdfError::InvalidStructure(format!(
                "object {} {} written out of sequence, expected {} 0",
                id.number(),
                id.generation(),
                expected
            )));
        }

        debug!(
            object = id.number(),
            offset = self.current_position,
            "writing object"
        );
        self.object_table.push((id, self.current_position));

        let header = format!("{} {} obj\n", id.number(), id.generation());
        self.write_bytes(header.as_bytes())?;

        self.write_object_value(object)?;

        self.write_bytes(b"\nendobj\n")?;
        Ok(())
    }

    fn write_object_value(&mut self, object: &Object) -> Result<()> {
        match object {
            Object::Integer(i) => self.write_bytes(i.to_string().as_bytes())?,
            Object::Real(f) => self.write_bytes(format_number(*f).as_bytes())?,
            Object::Name(n) => {
                self.write_bytes(b"/")?;
                self.write_bytes(n.as_bytes())?;
            }
            Object::Array(arr) => {
                self.write_bytes(b"[")?;
                for (i, obj) in arr.iter().enumerate() {
                    if i > 0 {
                        self.write_bytes(b" ")?;
                    }
                    self.write_object_value(obj)?;
                }
                self.write_bytes(b"]")?;
            }
            Object::Dictionary(dict) => {
                self.write_bytes(b"<<")?;
                for (key, value) in dict.entries() {
                    self.write_bytes(b" /")?;
                    self.write_bytes(key.as_bytes())?;
                    self.write_bytes(b" ")?;
                    self.write_object_value(value)?;
                }
                self.write_bytes(b" >>")?;
            }
            Object::Stream(dict, data) => {
                let declared = dict.get("Length").and_then(Object::as_integer);
                if declared != Some(data.len() as i64) {
                    return Err(PdfError::InvalidStructure(format!(
                        "stream /Length {:?} does not match {} data bytes",
                        declared,
                        data.len()
                    )));
                }
                self.write_object_value(&Object::Dictionary(dict.clone()))?;
                self.write_bytes(b"\nstream\n")?;
                self.write_bytes(data)?;
                self.write_bytes(b"\nendstream")?;
            }
            Object::Reference(id) => {
                let ref_str = format!("{} {} R", id.number(), id.generation());
                self.write_bytes(ref_str.as_bytes())?;
            }
        }
        Ok(())
    }

    /// Number of `/Size` entries: every written object plus the free head.
    fn table_size(&self) -> usize {
        self.object_table.len() + 1
    }

    pub fn write_xref(&mut self) -> Result<()> {
        self.write_bytes(b"xref\n")?;
        let subsection = format!("0 {}\n", self.table_size());
        self.write_bytes(subsection.as_bytes())?;

        // Free list head. Every record is 20 bytes, ending in space + LF.
        self.write_bytes(b"0000000000 65535 f \n")?;

        let entries: Vec<String> = self
            .object_table
            .iter()
            .map(|(id, position)| format!("{:010} {:05} n \n", position, id.generation()))
            .collect();
        for entry in entries {
            self.write_bytes(entry.as_bytes())?;
        }

        Ok(())
    }

    pub fn write_trailer(&mut self, root_id: ObjectId, xref_position: u64) -> Result<()> {
        if !self.object_table.iter().any(|(id, _)| *id == root_id) {
            return Err(PdfError::InvalidObjectReference(
                root_id.number(),
                root_id.generation(),
            ));
        }

        let trailer = format!(
            "trailer\n<< /Size {} /Root {} {} R >>\nstartxref\n{}\n%%EOF\n",
            self.table_size(),
            root_id.number(),
            root_id.generation(),
            xref_position
        );
        self.write_bytes(trailer.as_bytes())?;

        Ok(())
    }

    /// Offsets recorded so far, in object-number order.
    pub fn object_table(&self) -> &[(ObjectId, u64)] {
        &self.object_table
    }

    pub fn current_position(&self) -> u64 {
        self.current_position
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.current_position += data.len() as u64;
        Ok(())
    }
}

/// Write a finished document buffer to `path` in a single call.
///
/// Missing parent directories are created first. There is no retry and no
/// cleanup of a partially written file.
pub fn write_pdf_file(path: impl AsRef<Path>, bytes: &[u8]) -> Result<()> {
    let path = path.as_ref();
    create_parent_dirs(path)?;
    fs::write(path, bytes)?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote PDF");
    Ok(())
}

fn create_parent_dirs(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent)?;
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::Dictionary;

    fn catalog() -> Object {
        let mut dict = Dictionary::new();
        dict.set("Type", Object::Name("Catalog".to_string()));
        dict.set("Pages", ObjectId::new(2, 0));
        Object::Dictionary(dict)
    }

    #[test]
    fn test_pdf_writer_new_with_writer() {
        let writer = PdfWriter::new_with_writer(Vec::new());
        assert_eq!(writer.current_position(), 0);
        assert!(writer.object_table().is_empty());
    }

    #[test]
    fn test_write_header() {
        let mut buffer = Vec::new();
        let mut writer = PdfWriter::new_with_writer(&mut buffer);

        writer.write_header().unwrap();

        assert!(buffer.starts_with(b"%PDF-1.4\n"));
        assert_eq!(buffer.len(), 15);
        assert_eq!(buffer[9], b'%');
        assert_eq!(buffer[10], 0xE2);
        assert_eq!(buffer[11], 0xE3);
        assert_eq!(buffer[12], 0xCF);
        assert_eq!(buffer[13], 0xD3);
        assert_eq!(buffer[14], b'\n');
    }

    #[test]
    fn test_write_object() {
        let mut buffer = Vec::new();
        {
            let mut writer = PdfWriter::new_with_writer(&mut buffer);
            writer.write_header().unwrap();
            writer.write_object(ObjectId::new(1, 0), &catalog()).unwrap();
            assert_eq!(writer.object_table(), &[(ObjectId::new(1, 0), 15)]);
        }

        assert_eq!(
            &buffer[15..],
            b"1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n"
        );
    }

    #[test]
    fn test_write_array_and_reals() {
        let mut buffer = Vec::new();
        {
            let mut writer = PdfWriter::new_with_writer(&mut buffer);
            let media_box = Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(612.0),
                Object::Real(792.5),
            ]);
            writer.write_object(ObjectId::new(1, 0), &media_box).unwrap();
        }

        let content = String::from_utf8_lossy(&buffer);
        assert!(content.contains("[0 0 612 792.5]"));
    }

    #[test]
    fn test_write_stream() {
        let mut buffer = Vec::new();
        {
            let mut writer = PdfWriter::new_with_writer(&mut buffer);
            let mut dict = Dictionary::new();
            dict.set("Length", 15i64);
            let obj = Object::Stream(dict, b"BT /F1 12 Tf ET".to_vec());
            writer.write_object(ObjectId::new(1, 0), &obj).unwrap();
        }

        assert_eq!(
            buffer,
            b"1 0 obj\n<< /Length 15 >>\nstream\nBT /F1 12 Tf ET\nendstream\nendobj\n"
        );
    }

    #[test]
    fn test_stream_length_mismatch_rejected() {
        let mut writer = PdfWriter::new_with_writer(Vec::new());
        let mut dict = Dictionary::new();
        dict.set("Length", 3i64);
        let obj = Object::Stream(dict, b"four".to_vec());

        assert!(matches!(
            writer.write_object(ObjectId::new(1, 0), &obj),
            Err(PdfError::InvalidStructure(_))
        ));
    }

    #[test]
    fn test_out_of_sequence_object_rejected() {
        let mut writer = PdfWriter::new_with_writer(Vec::new());
        writer.write_object(ObjectId::new(1, 0), &catalog()).unwrap();

        let err = writer
            .write_object(ObjectId::new(3, 0), &catalog())
            .unwrap_err();
        assert!(matches!(err, PdfError::InvalidStructure(_)));

        // Reusing a number is the same violation.
        assert!(writer.write_object(ObjectId::new(1, 0), &catalog()).is_err());
    }

    #[test]
    fn test_write_xref() {
        let mut buffer = Vec::new();
        {
            let mut writer = PdfWriter::new_with_writer(&mut buffer);
            writer.write_header().unwrap();
            writer.write_object(ObjectId::new(1, 0), &catalog()).unwrap();
            writer.write_object(ObjectId::new(2, 0), &Object::Integer(1)).unwrap();
            writer.write_xref().unwrap();
        }

        let content = String::from_utf8_lossy(&buffer);
        let xref = &content[content.find("xref\n").unwrap()..];
        assert_eq!(
            xref,
            "xref\n0 3\n0000000000 65535 f \n0000000015 00000 n \n0000000064 00000 n \n"
        );
    }

    #[test]
    fn test_xref_records_are_20_bytes() {
        let mut buffer = Vec::new();
        {
            let mut writer = PdfWriter::new_with_writer(&mut buffer);
            writer.write_object(ObjectId::new(1, 0), &catalog()).unwrap();
            writer.write_xref().unwrap();
        }

        let start = buffer
            .windows(b"xref\n0 2\n".len())
            .position(|w| w == b"xref\n0 2\n")
            .unwrap()
            + b"xref\n0 2\n".len();
        let records = &buffer[start..];
        assert_eq!(records.len(), 40);
        assert_eq!(&records[18..20], b" \n");
        assert_eq!(&records[38..40], b" \n");
    }

    #[test]
    fn test_write_trailer() {
        let mut buffer = Vec::new();
        {
            let mut writer = PdfWriter::new_with_writer(&mut buffer);
            writer.write_object(ObjectId::new(1, 0), &catalog()).unwrap();
            writer.write_object(ObjectId::new(2, 0), &Object::Integer(0)).unwrap();
            assert_eq!(writer.object_table().len(), 2);
            writer.write_trailer(ObjectId::new(1, 0), 1234).unwrap();
        }

        let content = String::from_utf8_lossy(&buffer);
        assert!(content.ends_with(
            "trailer\n<< /Size 3 /Root 1 0 R >>\nstartxref\n1234\n%%EOF\n"
        ));
    }

    #[test]
    fn test_trailer_rejects_unwritten_root() {
        let mut writer = PdfWriter::new_with_writer(Vec::new());
        writer.write_object(ObjectId::new(1, 0), &catalog()).unwrap();

        assert!(matches!(
            writer.write_trailer(ObjectId::new(9, 0), 0),
            Err(PdfError::InvalidObjectReference(9, 0))
        ));
    }

    #[test]
    fn test_write_bytes_tracks_position() {
        let mut buffer = Vec::new();
        {
            let mut writer = PdfWriter::new_with_writer(&mut buffer);
            writer.write_bytes(b"Hello").unwrap();
            assert_eq!(writer.current_position(), 5);
            writer.write_bytes(b" World").unwrap();
            assert_eq!(writer.current_position(), 11);
        }
        assert_eq!(buffer, b"Hello World");
    }

    #[test]
    fn test_write_pdf_file_creates_parent_dirs() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("a").join("b").join("doc.pdf");

        write_pdf_file(&path, b"%PDF-1.4\n").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"%PDF-1.4\n");
    }

    #[test]
    fn test_write_pdf_file_reports_io_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let blocker = temp_dir.path().join("file");
        fs::write(&blocker, b"x").unwrap();

        // A regular file cannot act as a parent directory.
        let result = write_pdf_file(blocker.join("doc.pdf"), b"%PDF-1.4\n");
        assert!(matches!(result, Err(PdfError::Io(_))));
    }
}
