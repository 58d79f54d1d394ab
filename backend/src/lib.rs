pub mod draw;
pub mod error;
pub mod math;
pub mod system;
pub mod text;
pub mod texture;

pub use error::*;
