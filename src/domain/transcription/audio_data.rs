//! Audio data value object

/// Raw audio bytes downloaded from the file store, passed unchanged to the
/// transcription engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioData {
    data: Vec<u8>,
}

impl AudioData {
    /// Create AudioData from raw bytes
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Get the raw audio data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the size in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Get human-readable size
    pub fn human_readable_size(&self) -> String {
        let bytes = self.size_bytes();
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }
}
