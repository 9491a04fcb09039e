pub mod numbering;
pub mod templates;
