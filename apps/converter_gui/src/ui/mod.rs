//! UI layer for the converter: app shell and the single-card layout.

pub mod app;

pub use app::ConverterApp;
