// Public modules
pub mod defaults;
pub mod error;
pub mod generate;
pub mod input;
pub mod materialize;
pub mod paths;
pub mod slugify;
pub mod templates;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use generate::{generate, generate_project, GenerateOutput};
pub use slugify::slugify;
pub use input::{resolve_request, CliInputs, GenerationRequest, InputSource};
pub use templates::{render_all, render_all_with, RenderedFile, Template};
