use serde::{Deserialize, Serialize};

/// Document-level information written to the PDF `Info` dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub title: String,
    pub author: String,
    pub subject: String,
}

impl DocumentMetadata {
    pub fn new(title: impl Into<String>, author: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            subject: subject.into(),
        }
    }
}
