pub mod config;
pub mod core;
pub mod glyph;
pub mod service;

pub use crate::core::{Segment, Transliterator, VariantSelector};
pub use glyph::{check_integrity, GlyphTables, IntegrityPolicy, SymbolRecord, TableError};
pub use service::{GlyphService, RequestError};
