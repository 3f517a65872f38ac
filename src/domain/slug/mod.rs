pub mod generator;
pub mod registry;
pub mod services;
pub mod value_objects;

pub use generator::{is_canonical, slugify};
pub use registry::SlugRegistry;
pub use services::SlugAllocator;
pub use value_objects::Slug;
