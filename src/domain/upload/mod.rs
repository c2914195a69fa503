pub mod entity;
pub mod invariants;

pub use entity::{content_type_for, ImageFile, StorageKey, UploadResult};
pub use invariants::validate_image_file;
