pub mod document;
pub mod export;
pub mod snippet;
pub mod storage;

pub use document::Document;
pub use export::{ExportFormat, MergePolicy};
pub use snippet::{SnippetPatch, SnippetRecord, SnippetType};
pub use storage::{StorageConfig, StorageManager};
