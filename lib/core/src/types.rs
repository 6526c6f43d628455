use serde::Serialize;

/// Generic response envelope: a human-readable message plus optional
/// content. Success responses return the raw resource directly; this
/// envelope is used for error bodies, where `content` stays empty and
/// is omitted from the serialized form entirely.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseMessage<T: Serialize = ()> {
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<T>,
}

impl ResponseMessage<()> {
    /// Build an error envelope carrying only a message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            content: None,
        }
    }
}
