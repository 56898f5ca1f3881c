//! Content stream assembly.
//!
//! Turns an ordered list of text placements into the page's drawing operators.

use crate::error::{PdfError, Result};
use crate::text::{escape_literal_bytes, FontId, TextEncoding};
use tracing::debug;

/// One line of text placed at an absolute position on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct TextInstruction {
    pub font: FontId,
    /// Font size in points.
    pub size: f64,
    /// Horizontal offset from the page's left edge, in points.
    pub x: f64,
    /// Vertical offset from the page's bottom edge, in points.
    pub y: f64,
    pub text: String,
}

impl TextInstruction {
    pub fn new(font: FontId, size: f64, x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            font,
            size,
            x,
            y,
            text: text.into(),
        }
    }

    pub fn regular(size: f64, x: f64, y: f64, text: impl Into<String>) -> Self {
        Self::new(FontId::Regular, size, x, y, text)
    }

    pub fn bold(size: f64, x: f64, y: f64, text: impl Into<String>) -> Self {
        Self::new(FontId::Bold, size, x, y, text)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(PdfError::InvalidInstruction(format!(
                "font size must be a positive number, got {}",
                self.size
            )));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(PdfError::InvalidInstruction(format!(
                "position must be finite, got ({}, {})",
                self.x, self.y
            )));
        }
        Ok(())
    }
}

/// Ordered text instructions for the page.
///
/// Draw order is list order: the first instruction is painted first and the
/// content stream reproduces the list exactly as given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstructionList {
    instructions: Vec<TextInstruction>,
}

impl InstructionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, instruction: TextInstruction) -> &mut Self {
        self.instructions.push(instruction);
        self
    }

    pub fn with(mut self, instruction: TextInstruction) -> Self {
        self.instructions.push(instruction);
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TextInstruction> {
        self.instructions.iter()
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

impl FromIterator<TextInstruction> for InstructionList {
    fn from_iter<T: IntoIterator<Item = TextInstruction>>(iter: T) -> Self {
        Self {
            instructions: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for InstructionList {
    type Item = TextInstruction;
    type IntoIter = std::vec::IntoIter<TextInstruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.into_iter()
    }
}

impl<'a> IntoIterator for &'a InstructionList {
    type Item = &'a TextInstruction;
    type IntoIter = std::slice::Iter<'a, TextInstruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}

/// Uncompressed operator bytes for the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentStream {
    data: Vec<u8>,
}

impl ContentStream {
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Byte length, as written to the stream's `/Length`.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

pub struct ContentStreamBuilder {
    encoding: TextEncoding,
    lines: Vec<Vec<u8>>,
}

impl ContentStreamBuilder {
    pub fn new() -> Self {
        Self {
            encoding: TextEncoding::WinAnsiEncoding,
            lines: Vec::new(),
        }
    }

    /// Append the text object for one instruction.
    ///
    /// The line reads `BT /F1 10 Tf 1 0 0 1 x y Tm (text) Tj ET`.
    pub fn add(&mut self, instruction: &TextInstruction) -> Result<&mut Self> {
        instruction.validate()?;

        // Encode before escaping so errors point into the caller's text.
        let text_bytes = escape_literal_bytes(&self.encoding.encode(&instruction.text)?);

        let mut line = format!(
            "BT /{} {} Tf 1 0 0 1 {} {} Tm (",
            instruction.font.resource_name(),
            format_number(instruction.size),
            format_number(instruction.x),
            format_number(instruction.y),
        )
        .into_bytes();
        line.extend_from_slice(&text_bytes);
        line.extend_from_slice(b") Tj ET");

        self.lines.push(line);
        Ok(self)
    }

    pub fn add_all(&mut self, instructions: &InstructionList) -> Result<&mut Self> {
        for instruction in instructions {
            self.add(instruction)?;
        }
        Ok(self)
    }

    /// Join the text objects, one per line, without a trailing newline.
    pub fn build(self) -> ContentStream {
        let data = self.lines.join(&b'\n');
        debug!(
            instructions = self.lines.len(),
            bytes = data.len(),
            "built content stream"
        );
        ContentStream { data }
    }
}

impl Default for ContentStreamBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the content stream for `instructions` in one go.
pub fn build_content_stream(instructions: &InstructionList) -> Result<ContentStream> {
    let mut builder = ContentStreamBuilder::new();
    builder.add_all(instructions)?;
    Ok(builder.build())
}

/// Format a number for content stream operands: integral values without a
/// fractional part, otherwise at most six decimals with trailing zeros removed.
pub fn format_number(value: f64) -> String {
    let formatted = format!("{value:.6}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
