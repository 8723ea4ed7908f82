use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;
use tango_types::WordEntry;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("找不到單字列表檔案: {0}")]
    FileNotFound(String),

    #[error("解析單字列表失敗：{0}")]
    Decode(#[from] serde_json::Error),

    #[error("讀取單字列表失敗：{0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Deserialize)]
struct WordListJson {
    word_list: Vec<WordEntry>,
}

/// Read-only word list, kept in file order
#[derive(Debug, Clone, Default)]
pub struct WordCatalog {
    entries: Vec<WordEntry>,
}

impl WordCatalog {
    pub fn new(entries: Vec<WordEntry>) -> Self {
        Self { entries }
    }

    /// Parse the `{ "word_list": [...] }` document
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let parsed: WordListJson = serde_json::from_str(json)?;

        let mut seen = HashSet::new();
        for entry in &parsed.word_list {
            if !seen.insert(entry.id) {
                tracing::warn!("Duplicate word id {} ({})", entry.id, entry.word);
            }
        }

        Ok(Self::new(parsed.word_list))
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get_by_id(&self, id: i64) -> Option<&WordEntry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

pub struct CatalogLoader;

impl CatalogLoader {
    /// Load the word list compiled into the binary
    pub fn load_embedded() -> Result<WordCatalog, LoadError> {
        let json = include_str!("../data/word_list.json");
        tracing::info!("Loading embedded word list...");
        let catalog = WordCatalog::from_json(json)?;
        tracing::info!("Loaded {} words", catalog.len());
        Ok(catalog)
    }

    /// Load word list from file path
    pub fn load_from_file(path: &Path) -> Result<WordCatalog, LoadError> {
        tracing::info!("Loading word list from file: {}", path.display());
        let json = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LoadError::FileNotFound(path.display().to_string()),
            _ => LoadError::Io(e),
        })?;
        let catalog = WordCatalog::from_json(&json)?;
        tracing::info!("Loaded {} words from file", catalog.len());
        Ok(catalog)
    }

    pub fn load(path: Option<&Path>) -> Result<WordCatalog, LoadError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::load_embedded(),
        }
    }
}
