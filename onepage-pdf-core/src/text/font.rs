use crate::objects::{Dictionary, Object};
use crate::text::TextEncoding;

/// Which of the two page fonts a text instruction draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontId {
    /// Helvetica, resource `/F1`
    Regular,
    /// Helvetica-Bold, resource `/F2`
    Bold,
}

impl FontId {
    /// Name under which the font is registered in the page resources.
    pub fn resource_name(&self) -> &'static str {
        match self {
            FontId::Regular => "F1",
            FontId::Bold => "F2",
        }
    }

    /// Standard 14 base font backing this id.
    pub fn base_font(&self) -> &'static str {
        match self {
            FontId::Regular => "Helvetica",
            FontId::Bold => "Helvetica-Bold",
        }
    }
}

/// A non-embedded Type 1 font entry for the page resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontResource {
    pub id: FontId,
    pub encoding: TextEncoding,
}

impl FontResource {
    /// The two fonts every generated page carries, regular first.
    pub const STANDARD: [FontResource; 2] = [
        FontResource {
            id: FontId::Regular,
            encoding: TextEncoding::WinAnsiEncoding,
        },
        FontResource {
            id: FontId::Bold,
            encoding: TextEncoding::WinAnsiEncoding,
        },
    ];

    pub fn subtype(&self) -> &'static str {
        "Type1"
    }

    pub fn to_pdf_object(&self) -> Object {
        let mut font = Dictionary::with_capacity(4);
        font.set("Type", Object::Name("Font".to_string()));
        font.set("Subtype", Object::Name(self.subtype().to_string()));
        font.set("BaseFont", Object::Name(self.id.base_font().to_string()));
        font.set(
            "Encoding",
            Object::Name(self.encoding.pdf_name().to_string()),
        );
        Object::Dictionary(font)
    }
}
