//! Template catalog: every test template the CLI can generate.

pub mod euclid;

use minitesk_template::Template;

pub use euclid::EuclidTemplate;

/// All templates, in listing order.
pub fn all_templates() -> Vec<Box<dyn Template>> {
    vec![Box::new(EuclidTemplate)]
}

/// Look a template up by name.
pub fn find(name: &str) -> Option<Box<dyn Template>> {
    all_templates().into_iter().find(|t| t.name() == name)
}
