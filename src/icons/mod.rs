//! Phosphor icon catalog: keyword categories, a searchable tree and the
//! gallery view with weight-specific identifiers.

pub mod catalog;
pub mod gallery;

pub use gallery::{GalleryFilter, IconWeight, categories, category_of, gallery, identifier, tree};
