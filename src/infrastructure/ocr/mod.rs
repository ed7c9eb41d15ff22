//! OCR infrastructure module

mod ocrmypdf;

pub use ocrmypdf::OcrmypdfRunner;
