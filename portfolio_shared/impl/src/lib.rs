pub mod id;
pub mod image;
pub mod time;
