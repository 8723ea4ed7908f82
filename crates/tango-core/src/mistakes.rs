use tango_types::WordEntry;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MistakeError {
    #[error("Mistake index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Missed words in the order they were first missed, unique by id
#[derive(Debug, Clone, Default)]
pub struct MistakeLog {
    entries: Vec<WordEntry>,
}

impl MistakeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when an entry with the same id is already logged
    pub fn add_if_absent(&mut self, entry: WordEntry) -> bool {
        if self.entries.iter().any(|e| e.id == entry.id) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn remove_at(&mut self, index: usize) -> Result<WordEntry, MistakeError> {
        if index >= self.entries.len() {
            return Err(MistakeError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&WordEntry> {
        self.entries.get(index)
    }

    pub fn all(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
