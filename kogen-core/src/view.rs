use std::path::PathBuf;

/// Directory, relative to the project root, that holds one directory per view.
pub const VIEWS_DIR: &str = "web_modules/views";

/// The user's input for one generated view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSpec {
    pub name: String,
    pub route: String,
    /// Only generate the index module and the HTML template.
    pub template_only: bool,
}

impl ViewSpec {
    pub fn new(name: impl Into<String>, route: impl Into<String>, template_only: bool) -> Self {
        Self {
            name: name.into(),
            route: route.into(),
            template_only,
        }
    }

    /// Name of the generated view-model class: the view name with its first
    /// character upper-cased.
    pub fn class_name(&self) -> String {
        capitalize(&self.name)
    }

    /// Directory of the view, relative to the project root.
    pub fn dir(&self) -> PathBuf {
        PathBuf::from(VIEWS_DIR).join(&self.name)
    }
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
