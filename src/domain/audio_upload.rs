use bytes::Bytes;

/// Audio payload received from a client, kept in memory for the lifetime of
/// one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioUpload {
    pub data: Bytes,
    pub file_name: String,
    pub mime_type: Option<String>,
}

impl AudioUpload {
    pub fn new(
        data: impl Into<Bytes>,
        file_name: impl Into<String>,
        mime_type: Option<String>,
    ) -> Self {
        Self {
            data: data.into(),
            file_name: file_name.into(),
            mime_type,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn mime_or_default(&self) -> &str {
        self.mime_type.as_deref().unwrap_or("application/octet-stream")
    }
}
