use serde::Serialize;

/// One image import emitted into an MDX page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnippetImport {
    pub slug: String,
    /// Path relative to the page directory, always `/`-separated.
    pub relative_path: String,
    pub alt: String,
}

impl SnippetImport {
    pub fn import_line(&self) -> String {
        format!("import {} from \"./{}\"", self.slug, self.relative_path)
    }

    pub fn image_tag(&self, component: &str) -> String {
        format!(
            "<{} src={{{}}} alt=\"{}\" caption=\"\" />",
            component,
            self.slug,
            self.alt.replace('"', "&quot;")
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SnippetSection {
    pub name: String,
    pub imports: Vec<SnippetImport>,
}
