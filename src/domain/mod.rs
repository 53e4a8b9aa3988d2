pub mod item;

pub use item::{Author, ContentItem, ContentKind};
