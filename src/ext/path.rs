use std::path::Path;

/// Extension trait for Path to provide convenient display helpers
pub trait PathExt {
    /// Converts a path to a String using display(), which always succeeds
    /// but may use replacement characters for invalid Unicode.
    ///
    /// # Examples
    /// ```
    /// use template_init::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("test");
    /// assert_eq!(path.display_string(), "test");
    /// ```
    fn display_string(&self) -> String;

    /// Strips `root` from the path, falling back to the path itself when it
    /// does not live under `root`.
    ///
    /// # Examples
    /// ```
    /// use template_init::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("/work/project/src/lib.py");
    /// assert_eq!(path.relative_to(Path::new("/work/project")), Path::new("src/lib.py"));
    /// ```
    fn relative_to(&self, root: &Path) -> &Path;
}

impl PathExt for Path {
    fn display_string(&self) -> String {
        self.display().to_string()
    }

    fn relative_to(&self, root: &Path) -> &Path {
        self.strip_prefix(root).unwrap_or(self)
    }
}
