use serde::{Deserialize, Serialize};

/// An ordered list of project names collected under one label.
///
/// The label is written verbatim into the instructor key and the collection
/// log, so it doubles as the category identifier. Project order matters: the
/// 1-based position of a project within its category feeds code generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category label (e.g. `CATEGORY_A_ANIMAL_APE`)
    pub name: String,
    /// Project names in fetch order
    #[serde(default)]
    pub projects: Vec<String>,
}

impl Category {
    /// Build a category from a label and any iterable of project names.
    pub fn new<I, S>(name: impl Into<String>, projects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { name: name.into(), projects: projects.into_iter().map(Into::into).collect() }
    }

    /// Number of projects in the category.
    pub fn len(&self) -> usize { self.projects.len() }

    /// Whether the category lists no projects.
    pub fn is_empty(&self) -> bool { self.projects.is_empty() }

    /// Iterate `(index, project)` pairs with 1-based indices.
    pub fn indexed(&self) -> impl Iterator<Item = (usize, &str)> {
        self.projects.iter().enumerate().map(|(i, p)| (i + 1, p.as_str()))
    }
}
