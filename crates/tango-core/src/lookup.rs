use tango_types::WordEntry;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("無法啟動字典程式 '{program}'：{source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("字典程式 '{program}' 執行失敗：{status}")]
    Failed {
        program: String,
        status: std::process::ExitStatus,
    },
    #[error("字典裡沒有 '{0}'")]
    NotFound(String),
}

/// Dictionary reference for a word. Blocking: callers run it off the async runtime.
pub trait Lookup: Send + Sync {
    fn lookup(&self, word: &str) -> Result<String, LookupError>;
}

/// One-line summary of an entry, shown when no dictionary is available
pub fn entry_summary(entry: &WordEntry) -> String {
    format!("{} ({}) {}", entry.word, entry.word_type, entry.meaning)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_summary() {
        let entry = WordEntry {
            id: 1,
            word: "abandon".to_string(),
            word_type: "v.".to_string(),
            meaning: "放棄".to_string(),
        };
        assert_eq!(entry_summary(&entry), "abandon (v.) 放棄");
    }

    #[test]
    fn test_not_found_message_names_word() {
        assert_eq!(LookupError::NotFound("cat".to_string()).to_string(), "字典裡沒有 'cat'");
    }
}
