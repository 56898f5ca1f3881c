use crate::error::{PdfError, Result};

/// US Letter width in points.
pub const DEFAULT_PAGE_WIDTH: f64 = 612.0;
/// US Letter height in points.
pub const DEFAULT_PAGE_HEIGHT: f64 = 792.0;
/// Left margin the summary layout starts its lines at.
pub const DEFAULT_MARGIN_X: f64 = 54.0;

/// Page geometry handed to the document at construction time.
///
/// `page_width`/`page_height` become the page's `/MediaBox`. `margin_x` is a
/// layout hint for whoever produces the text instructions; the encoder itself
/// never moves text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageConfig {
    pub page_width: f64,
    pub page_height: f64,
    pub margin_x: f64,
}

impl PageConfig {
    pub fn new(page_width: f64, page_height: f64) -> Self {
        Self {
            page_width,
            page_height,
            margin_x: DEFAULT_MARGIN_X,
        }
    }

    /// Create a US Letter page (8.5" x 11")
    pub fn letter() -> Self {
        Self::new(DEFAULT_PAGE_WIDTH, DEFAULT_PAGE_HEIGHT)
    }

    pub fn with_margin_x(mut self, margin_x: f64) -> Self {
        self.margin_x = margin_x;
        self
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("width", self.page_width), ("height", self.page_height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PdfError::InvalidConfig(format!(
                    "page {name} must be a positive number, got {value}"
                )));
            }
        }
        if !self.margin_x.is_finite()
            || self.margin_x < 0.0
            || self.margin_x * 2.0 >= self.page_width
        {
            return Err(PdfError::InvalidConfig(format!(
                "horizontal margin {} does not fit a page {} wide",
                self.margin_x, self.page_width
            )));
        }
        Ok(())
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::letter()
    }
}
