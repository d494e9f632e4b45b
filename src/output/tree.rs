//! Writes the serialized annotated tree produced by
//! [`crate::core::result::serialized_tree`] verbatim to a file.

use std::path::Path;

use crate::error::{PargenfsError, Result};

/// Writes `description` to `path`, overwriting any existing contents.
pub fn write_tree(path: impl AsRef<Path>, description: &str) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, description).map_err(|e| PargenfsError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn writes_the_description_verbatim() {
        let file = NamedTempFile::new().unwrap();
        write_tree(file.path(), "(a,b);").unwrap();
        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents, "(a,b);");
    }
}
