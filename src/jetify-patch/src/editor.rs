//! Forward-only line-cursor editing of a single text file.

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::{PatchError, PatchResult};
use crate::store::FileStore;

/// Line-oriented rewriter for one file.
///
/// Input lines are consumed front to back: each line is either copied
/// verbatim or rewritten into the output buffer, and never revisited.
/// Nothing touches the store until [`LineEditor::write`], so an aborted
/// edit leaves the file exactly as it was.
pub struct LineEditor<'a> {
    store: &'a dyn FileStore,
    path: PathBuf,
    lines: Vec<String>,
    cursor: usize,
    output: String,
}

impl<'a> LineEditor<'a> {
    /// Read the file and position the cursor on its first line.
    pub fn open(store: &'a dyn FileStore, path: &Path) -> PatchResult<Self> {
        let contents = store
            .read_to_string(path)
            .map_err(|source| PatchError::read(path, source))?;

        let mut lines: Vec<String> = contents.split('\n').map(str::to_owned).collect();
        // A trailing newline in the file yields a spurious empty final element.
        if lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }

        Ok(Self {
            store,
            path: path.to_path_buf(),
            lines,
            cursor: 0,
            output: String::new(),
        })
    }

    /// The line under the cursor.
    pub fn current_line(&self) -> PatchResult<&str> {
        self.lines
            .get(self.cursor)
            .map(String::as_str)
            .ok_or_else(|| PatchError::cursor_out_of_range(&self.path, self.cursor))
    }

    /// Copy lines verbatim into the output until one matches `anchor`,
    /// leaving the cursor on the matching line without copying it.
    ///
    /// Reaching end of file first means the file is not in the expected
    /// shape; the caller must abandon the edit without writing.
    pub fn advance_to(&mut self, anchor: &Regex) -> PatchResult<()> {
        while self.cursor < self.lines.len() && !anchor.is_match(&self.lines[self.cursor]) {
            self.copy_current_line();
        }
        if self.cursor == self.lines.len() {
            return Err(PatchError::anchor_not_found(&self.path, anchor.as_str()));
        }
        Ok(())
    }

    /// Rewrite the current line, substituting the first match of
    /// `pattern` only, and advance past it.
    ///
    /// Single-occurrence replacement is required behavior: a line holding
    /// two rewritable tokens keeps its second occurrence untouched.
    pub fn edit_current_line(&mut self, pattern: &Regex, replacement: &str) -> PatchResult<()> {
        let line = self
            .lines
            .get(self.cursor)
            .ok_or_else(|| PatchError::cursor_out_of_range(&self.path, self.cursor))?;
        let rewritten = pattern.replace(line, replacement).into_owned();
        self.output.push_str(&rewritten);
        self.output.push('\n');
        self.cursor += 1;
        Ok(())
    }

    /// Append a line to the output buffer, with exactly one trailing
    /// newline, without consuming any input line.
    pub fn append_line(&mut self, text: &str) {
        self.output.push_str(text);
        if !text.ends_with('\n') {
            self.output.push('\n');
        }
    }

    /// Copy every remaining line verbatim, exhausting the cursor.
    pub fn finish(&mut self) {
        while self.cursor < self.lines.len() {
            self.copy_current_line();
        }
    }

    /// Persist the output buffer over the original file in one write.
    ///
    /// Only called after every edit step for the file succeeded; a
    /// partial buffer is never written.
    pub fn write(&self) -> PatchResult<()> {
        self.store
            .write(&self.path, &self.output)
            .map_err(|source| PatchError::write(&self.path, source))
    }

    fn copy_current_line(&mut self) {
        self.output.push_str(&self.lines[self.cursor]);
        self.output.push('\n');
        self.cursor += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use pretty_assertions::assert_eq;

    fn editor_over<'a>(store: &'a MemoryStore, contents: &str) -> LineEditor<'a> {
        store.insert("/file.txt", contents);
        LineEditor::open(store, Path::new("/file.txt")).unwrap()
    }

    fn re(pattern: &str) -> Regex {
        Regex::new(pattern).unwrap()
    }

    #[test]
    fn test_open_drops_trailing_newline_artifact() {
        let store = MemoryStore::new();
        let editor = editor_over(&store, "one\ntwo\n");
        assert_eq!(editor.lines, vec!["one", "two"]);
    }

    #[test]
    fn test_open_keeps_last_line_without_trailing_newline() {
        let store = MemoryStore::new();
        let editor = editor_over(&store, "one\ntwo");
        assert_eq!(editor.lines, vec!["one", "two"]);
    }

    #[test]
    fn test_advance_to_copies_preceding_lines() {
        let store = MemoryStore::new();
        let mut editor = editor_over(&store, "alpha\nbeta\ngamma\n");

        editor.advance_to(&re("^gamma$")).unwrap();
        assert_eq!(editor.current_line().unwrap(), "gamma");
        assert_eq!(editor.output, "alpha\nbeta\n");
    }

    #[test]
    fn test_advance_to_missing_anchor() {
        let store = MemoryStore::new();
        let mut editor = editor_over(&store, "alpha\nbeta\n");

        let err = editor.advance_to(&re("^delta$")).unwrap_err();
        assert!(matches!(err, PatchError::AnchorNotFound { .. }));
        // The attempt is abandoned without writing anything.
        assert_eq!(store.contents(Path::new("/file.txt")).unwrap(), "alpha\nbeta\n");
    }

    #[test]
    fn test_edit_replaces_first_match_only() {
        let store = MemoryStore::new();
        let mut editor = editor_over(&store, "foo and foo again\n");

        editor.edit_current_line(&re("foo"), "bar").unwrap();
        assert_eq!(editor.output, "bar and foo again\n");
    }

    #[test]
    fn test_edit_past_end_is_out_of_range() {
        let store = MemoryStore::new();
        let mut editor = editor_over(&store, "only\n");

        editor.finish();
        let err = editor.edit_current_line(&re("only"), "changed").unwrap_err();
        assert!(matches!(err, PatchError::CursorOutOfRange { line: 1, .. }));
        assert!(editor.current_line().is_err());
    }

    #[test]
    fn test_append_line_normalizes_trailing_newline() {
        let store = MemoryStore::new();
        let mut editor = editor_over(&store, "head\n");

        editor.finish();
        editor.append_line("bare");
        editor.append_line("terminated\n");
        assert_eq!(editor.output, "head\nbare\nterminated\n");
    }

    #[test]
    fn test_finish_and_write_preserve_content() {
        let store = MemoryStore::new();
        let mut editor = editor_over(&store, "one\ntwo\nthree\n");

        editor.finish();
        editor.write().unwrap();
        assert_eq!(
            store.contents(Path::new("/file.txt")).unwrap(),
            "one\ntwo\nthree\n"
        );
    }

    #[test]
    fn test_write_adds_final_newline_when_missing() {
        let store = MemoryStore::new();
        let mut editor = editor_over(&store, "one\ntwo");

        editor.finish();
        editor.write().unwrap();
        assert_eq!(store.contents(Path::new("/file.txt")).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_anchored_edit_end_to_end() {
        let store = MemoryStore::new();
        let mut editor = editor_over(&store, "a\n    compileSdkVersion 27\nb\n");

        editor.advance_to(&re(r"^\s+compileSdkVersion\s")).unwrap();
        editor
            .edit_current_line(&re(r"compileSdkVersion\s.*$"), "compileSdkVersion 28")
            .unwrap();
        editor.finish();
        editor.write().unwrap();

        assert_eq!(
            store.contents(Path::new("/file.txt")).unwrap(),
            "a\n    compileSdkVersion 28\nb\n"
        );
    }
}
