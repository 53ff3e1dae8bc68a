pub mod data;
pub mod diagnostics;
pub mod document;
pub mod hover;
pub mod node_path;
pub mod selectors;
