use crate::content::{build_content_stream, ContentStream, InstructionList, TextInstruction};
use crate::error::Result;
use crate::objects::{Dictionary, Object, ObjectId};
use crate::page::PageConfig;
use crate::text::FontResource;
use crate::writer::{write_pdf_file, PdfWriter};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CATALOG_ID: ObjectId = ObjectId::new(1, 0);
pub const PAGES_ID: ObjectId = ObjectId::new(2, 0);
pub const PAGE_ID: ObjectId = ObjectId::new(3, 0);
pub const FONT_REGULAR_ID: ObjectId = ObjectId::new(4, 0);
pub const FONT_BOLD_ID: ObjectId = ObjectId::new(5, 0);
pub const CONTENT_ID: ObjectId = ObjectId::new(6, 0);

/// The six indirect objects of a single-page document, in object-number order.
///
/// Numbers are fixed (catalog 1, page tree 2, page 3, fonts 4 and 5, content
/// stream 6), so the same page and text always serialize to the same bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectGraph {
    objects: Vec<(ObjectId, Object)>,
}

impl ObjectGraph {
    pub fn assemble(config: &PageConfig, content: ContentStream) -> Result<Self> {
        config.validate()?;

        let [regular, bold] = FontResource::STANDARD;
        let fonts = [(regular, FONT_REGULAR_ID), (bold, FONT_BOLD_ID)];
        let objects = vec![
            (CATALOG_ID, catalog()),
            (PAGES_ID, page_tree()),
            (PAGE_ID, page(config, &fonts)),
            (FONT_REGULAR_ID, regular.to_pdf_object()),
            (FONT_BOLD_ID, bold.to_pdf_object()),
            (CONTENT_ID, content_stream(content)),
        ];

        Ok(Self { objects })
    }

    pub fn objects(&self) -> &[(ObjectId, Object)] {
        &self.objects
    }

    /// Document root named by the trailer.
    pub fn root(&self) -> ObjectId {
        CATALOG_ID
    }

    pub fn get(&self, id: ObjectId) -> Option<&Object> {
        self.objects
            .iter()
            .find(|(object_id, _)| *object_id == id)
            .map(|(_, object)| object)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

fn catalog() -> Object {
    let mut catalog = Dictionary::new();
    catalog.set("Type", Object::Name("Catalog".to_string()));
    catalog.set("Pages", Object::Reference(PAGES_ID));
    Object::Dictionary(catalog)
}

fn page_tree() -> Object {
    let mut pages_dict = Dictionary::new();
    pages_dict.set("Type", Object::Name("Pages".to_string()));
    pages_dict.set("Kids", Object::Array(vec![Object::Reference(PAGE_ID)]));
    pages_dict.set("Count", Object::Integer(1));
    Object::Dictionary(pages_dict)
}

fn page(config: &PageConfig, fonts: &[(FontResource, ObjectId)]) -> Object {
    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name("Page".to_string()));
    page_dict.set("Parent", Object::Reference(PAGES_ID));
    page_dict.set(
        "MediaBox",
        vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(config.page_width),
            Object::Real(config.page_height),
        ],
    );

    let font_dict: Dictionary = fonts
        .iter()
        .map(|(font, id)| (font.id.resource_name().to_string(), Object::Reference(*id)))
        .collect();
    let mut resources = Dictionary::new();
    resources.set("Font", font_dict);
    page_dict.set("Resources", resources);

    page_dict.set("Contents", Object::Reference(CONTENT_ID));
    Object::Dictionary(page_dict)
}

fn content_stream(content: ContentStream) -> Object {
    let mut stream_dict = Dictionary::new();
    stream_dict.set("Length", Object::Integer(content.len() as i64));
    Object::Stream(stream_dict, content.into_data())
}

/// A single-page document: page geometry plus the text drawn on it.
///
/// # Example
///
/// ```rust,no_run
/// use onepage_pdf::{Document, PageConfig, TextInstruction};
///
/// # fn main() -> onepage_pdf::Result<()> {
/// let mut doc = Document::new(PageConfig::letter());
/// doc.add_text(TextInstruction::bold(18.0, 54.0, 756.0, "Title"))
///     .add_text(TextInstruction::regular(10.0, 54.0, 730.0, "Body (with) parens"));
/// let path = doc.save("out/test.pdf")?;
/// println!("{}", path.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Document {
    config: PageConfig,
    instructions: InstructionList,
}

impl Document {
    pub fn new(config: PageConfig) -> Self {
        Self {
            config,
            instructions: InstructionList::new(),
        }
    }

    pub fn with_instructions(config: PageConfig, instructions: InstructionList) -> Self {
        Self {
            config,
            instructions,
        }
    }

    /// Queue a line of text. Lines are drawn in the order they are added.
    pub fn add_text(&mut self, instruction: TextInstruction) -> &mut Self {
        self.instructions.push(instruction);
        self
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn instructions(&self) -> &InstructionList {
        &self.instructions
    }

    /// Encode the complete file in memory.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let content = build_content_stream(&self.instructions)?;
        let graph = ObjectGraph::assemble(&self.config, content)?;

        let mut writer = PdfWriter::new_with_writer(Vec::new());
        writer.write_document(&graph)?;
        let bytes = writer.into_inner();
        debug!(objects = graph.len(), bytes = bytes.len(), "encoded document");
        Ok(bytes)
    }

    /// Encode and write to `path`, creating parent directories as needed.
    ///
    /// Nothing touches the filesystem until encoding has succeeded.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let bytes = self.to_bytes()?;
        let path = path.as_ref();
        write_pdf_file(path, &bytes)?;
        Ok(path.to_path_buf())
    }
}
