//! Name-based text file classification
//!
//! Classification looks only at the file name, so a binary file with a
//! text extension is misclassified. That limitation is accepted; there is
//! no content sniffing.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::path::Path;

static TEXT_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "txt", "md", "js", "ts", "jsx", "tsx", "py", "java", "cpp", "c",
        "h", "hpp", "css", "scss", "sass", "html", "htm", "xml", "json",
        "yaml", "yml", "toml", "ini", "cfg", "conf", "sh", "bash", "zsh",
        "fish", "ps1", "bat", "cmd", "sql", "go", "rs", "php", "rb",
        "swift", "kt", "scala", "clj", "hs", "elm", "ml", "fs", "vb",
        "cs", "dart", "r", "m", "pl", "lua", "vim",
    ]
    .into_iter()
    .collect()
});

pub struct TextFileFilter;

impl TextFileFilter {
    /// Returns true when the name carries a known text extension, or no
    /// extension at all (README, Makefile, dotfiles).
    pub fn is_text_file(file_name: &str) -> bool {
        match Path::new(file_name).extension().and_then(|ext| ext.to_str()) {
            Some(ext) => TEXT_EXTENSIONS.contains(ext.to_lowercase().as_str()),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions_are_text() {
        assert!(TextFileFilter::is_text_file("main.py"));
        assert!(TextFileFilter::is_text_file("notes.txt"));
        assert!(TextFileFilter::is_text_file("lib.rs"));
        assert!(TextFileFilter::is_text_file("config.yaml"));
        assert!(TextFileFilter::is_text_file("script.sh"));
    }

    #[test]
    fn extension_matching_is_case_insensitive() {
        assert!(TextFileFilter::is_text_file("MAIN.PY"));
        assert!(TextFileFilter::is_text_file("Readme.MD"));
        assert!(TextFileFilter::is_text_file("query.Sql"));
    }

    #[test]
    fn unknown_extensions_are_not_text() {
        assert!(!TextFileFilter::is_text_file("image.png"));
        assert!(!TextFileFilter::is_text_file("data.bin"));
        assert!(!TextFileFilter::is_text_file("archive.tar.gz"));
    }

    #[test]
    fn names_without_extension_are_text() {
        assert!(TextFileFilter::is_text_file("README"));
        assert!(TextFileFilter::is_text_file("Makefile"));
        assert!(TextFileFilter::is_text_file("LICENSE"));
    }

    #[test]
    fn dotfiles_count_as_extensionless() {
        assert!(TextFileFilter::is_text_file(".gitignore"));
        assert!(TextFileFilter::is_text_file(".bashrc"));
    }
}
