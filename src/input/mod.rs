//! Job description input
//! Handles file detection, text extraction, and request loading

pub mod file_detector;
pub mod text_extractor;
pub mod manager;
pub mod sample;

pub use manager::InputManager;
