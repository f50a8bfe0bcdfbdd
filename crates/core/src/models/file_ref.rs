//! Uploaded file references and upload slots

use std::fmt;
use std::path::Path;

use crate::error::Result;

/// A file chosen for upload. Only the name and size are known; content is
/// never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef {
    pub name: String,
    pub size_bytes: u64,
    /// Lowercase suffix after the last '.', if the name has one
    pub extension: Option<String>,
}

impl FileRef {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        let name = name.into();
        let extension = extension_of(&name);
        Self {
            name,
            size_bytes,
            extension,
        }
    }

    /// Build a reference from a path on disk, reading only its metadata
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(name, metadata.len()))
    }

    /// True if this file's extension equals `required` (with or without
    /// the leading dot), ignoring case
    pub fn has_extension(&self, required: &str) -> bool {
        let required = required.trim_start_matches('.').to_lowercase();
        self.extension.as_deref() == Some(required.as_str())
    }

    /// Size formatted as kilobytes with one decimal, e.g. "1.5 KB"
    pub fn size_label(&self) -> String {
        format!("{:.1} KB", self.size_bytes as f64 / 1024.0)
    }
}

fn extension_of(name: &str) -> Option<String> {
    name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase())
}

/// The three typed upload positions of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FileSlot {
    Txt,
    Cer,
    Key,
}

impl FileSlot {
    pub const ALL: [FileSlot; 3] = [FileSlot::Txt, FileSlot::Cer, FileSlot::Key];

    /// Required extension, without the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Cer => "cer",
            Self::Key => "key",
        }
    }

    /// Required extension as shown to users, e.g. ".cer"
    pub fn accepted(&self) -> String {
        format!(".{}", self.extension())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Txt => "Archivo de Texto (.txt)",
            Self::Cer => "Certificado Digital (.cer)",
            Self::Key => "Clave Privada (.key)",
        }
    }

    /// Stable key used by the UI to address the slot
    pub fn key(&self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Cer => "cer",
            Self::Key => "key",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    pub fn accepts(&self, file: &FileRef) -> bool {
        file.has_extension(self.extension())
    }
}

impl fmt::Display for FileSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_extension_is_suffix_after_last_dot() {
        assert_eq!(FileRef::new("report.txt", 0).extension.as_deref(), Some("txt"));
        assert_eq!(FileRef::new("a.b.KEY", 0).extension.as_deref(), Some("key"));
        assert_eq!(FileRef::new(".cer", 0).extension.as_deref(), Some("cer"));
        assert_eq!(FileRef::new("README", 0).extension, None);
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        let file = FileRef::new("cert.CER", 10);
        assert!(file.has_extension(".cer"));
        assert!(file.has_extension("cer"));
        assert!(!file.has_extension(".key"));
    }

    #[test]
    fn test_no_partial_extension_match() {
        assert!(!FileRef::new("notes.txt.bak", 0).has_extension(".txt"));
        assert!(!FileRef::new("notes.text", 0).has_extension(".txt"));
        assert!(!FileRef::new("txt", 0).has_extension(".txt"));
    }

    #[test]
    fn test_size_label() {
        assert_eq!(FileRef::new("a.txt", 1536).size_label(), "1.5 KB");
        assert_eq!(FileRef::new("a.txt", 0).size_label(), "0.0 KB");
    }

    #[test]
    fn test_from_path_reads_name_and_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("firma.Key");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&[0u8; 2048]).unwrap();
        drop(file);

        let file_ref = FileRef::from_path(&path).unwrap();
        assert_eq!(file_ref.name, "firma.Key");
        assert_eq!(file_ref.size_bytes, 2048);
        assert!(FileSlot::Key.accepts(&file_ref));
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FileRef::from_path(&dir.path().join("missing.txt")).is_err());
    }

    #[test]
    fn test_slot_keys_round_trip() {
        for slot in FileSlot::ALL {
            assert_eq!(FileSlot::from_key(slot.key()), Some(slot));
        }
        assert_eq!(FileSlot::from_key("pdf"), None);
        assert_eq!(FileSlot::Cer.accepted(), ".cer");
    }
}
