/// A page element whose content loaders replace.
pub trait Container {
    /// Stable element id.
    fn id(&self) -> &str;

    /// Replace the whole content with `html` in one write.
    fn replace_content(&mut self, html: String);

    /// Replace the class list with a single class.
    fn set_class(&mut self, class: &str);

    fn remove_class(&mut self, class: &str);
}

/// In-memory container, used by the CLI and in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryContainer {
    id: String,
    content: String,
    classes: Vec<String>,
}

impl MemoryContainer {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Start with some placeholder content and classes, e.g. a loading hint.
    pub fn with_content(mut self, content: impl Into<String>, classes: &[&str]) -> Self {
        self.content = content.into();
        self.classes = classes.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// The element as markup.
    pub fn to_html(&self) -> String {
        let mut html = format!(r#"<div id="{}""#, crate::render::escape_html(&self.id));
        if !self.classes.is_empty() {
            html.push_str(&format!(
                r#" class="{}""#,
                crate::render::escape_html(&self.classes.join(" "))
            ));
        }
        html.push('>');
        html.push_str(&self.content);
        html.push_str("</div>");
        html
    }
}

impl Container for MemoryContainer {
    fn id(&self) -> &str {
        &self.id
    }

    fn replace_content(&mut self, html: String) {
        self.content = html;
    }

    fn set_class(&mut self, class: &str) {
        self.classes = vec![class.to_string()];
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }
}
