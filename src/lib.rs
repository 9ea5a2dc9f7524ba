pub mod config;
pub mod error;
pub mod field;
pub mod generator;
pub mod math;
pub mod render;
pub mod viewer;

pub use config::RenderConfig;
pub use error::{FieldError, Result};
pub use field::{BOUNDED, ESCAPED, Field};
pub use generator::generate;
pub use math::C;
pub use render::{save_png, to_image};
pub use viewer::show;
