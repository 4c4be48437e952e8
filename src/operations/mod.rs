pub mod assembly;
pub mod mapping;
pub mod offset;
