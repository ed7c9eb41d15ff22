//! OcrDesk - desktop OCR utility wrapping the ocrmypdf CLI
//!
//! This crate provides the core functionality for submitting a PDF or image
//! file to the external `ocrmypdf` command and saving the OCR-augmented
//! result, with a single-flight background job at its center.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Core business logic, value objects, entities, and errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (ocrmypdf, notifications, etc.)
//! - **CLI**: Command-line interface, argument parsing, and the daemon loop

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
