pub mod conversion;
pub mod loader;
pub mod model;

pub use conversion::*;
pub use model::*;
