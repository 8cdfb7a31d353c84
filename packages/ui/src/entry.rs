/// One text fragment of a rendered entry, with an optional CSS class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub text: String,
    pub class: Option<&'static str>,
}

impl Field {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: None,
        }
    }

    pub fn styled(text: impl Into<String>, class: &'static str) -> Self {
        Self {
            text: text.into(),
            class: Some(class),
        }
    }
}

/// A fully built list entry, appended to a list target in one step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Entry {
    pub fields: Vec<Field>,
}

impl Entry {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Text of the first field carrying `class`.
    pub fn field(&self, class: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.class == Some(class))
            .map(|f| f.text.as_str())
    }

    /// Text of every field, in display order.
    pub fn texts(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.text.as_str()).collect()
    }
}
