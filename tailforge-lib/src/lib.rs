pub mod design;
pub mod error;
pub mod generate;
pub mod parser;
pub mod style;

pub use error::TranslateError;
pub use generate::{process_stylesheet, synthesize_component, ComponentDescriptor, ComponentStats};
pub use parser::declarations::DeclarationMap;
