pub mod catalog;
pub mod error;
pub mod loader;
pub mod scorer;
// cmd and reports are modules of the binary crate (main.rs): only the
// grading core is library surface.
