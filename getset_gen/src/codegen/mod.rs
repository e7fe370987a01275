pub mod derive;
pub mod go;
pub mod go_gen;
pub mod render;

pub use derive::{derive, AccessorEntry, DeriveOptions, Output};
pub use go::{GeneratedFiles, GoCodeGenerator, GoCodeGeneratorOptions};
pub use render::TypeRenderer;
