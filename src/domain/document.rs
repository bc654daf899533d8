use uuid::Uuid;

pub const DEFAULT_FILENAME: &str = "policy.pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

/// An uploaded policy document as seen by the extraction layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub filename: String,
    pub content_type: ContentType,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Pdf,
    Text,
}

impl ContentType {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "application/pdf" => Some(Self::Pdf),
            "text/plain" => Some(Self::Text),
            _ => None,
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Text => "text/plain",
        }
    }
}

impl Document {
    /// Blank filenames fall back to [`DEFAULT_FILENAME`].
    pub fn new(filename: &str, content_type: ContentType, size_bytes: u64) -> Self {
        let filename = if filename.trim().is_empty() {
            DEFAULT_FILENAME.to_string()
        } else {
            filename.to_string()
        };
        Self {
            id: DocumentId::new(),
            filename,
            content_type,
            size_bytes,
        }
    }

    pub fn pdf(filename: &str, size_bytes: u64) -> Self {
        Self::new(filename, ContentType::Pdf, size_bytes)
    }
}
