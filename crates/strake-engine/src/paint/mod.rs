//! Color model for polygon fills and strokes.
//!
//! Shapes carry a normalized RGB triple per style slot; opacity lives on the
//! entity (`alpha`), so it is applied per shape, not per channel.

mod color;

pub use color::Rgb;
