//! A single shader file, ready to be embedded
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::{Error, escape::write_escaped, name::symbol_name};

/// One input shader: its symbol name and exact file contents
///
/// The name depends only on the file's base name (see
/// [`symbol_name`](crate::symbol_name)); contents are kept as raw bytes, with
/// no decoding or newline translation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShaderAsset {
    name: String,
    path: PathBuf,
    bytes: Vec<u8>,
}

impl ShaderAsset {
    /// Builds an asset from a path and its contents, without touching disk
    pub fn new<P: Into<PathBuf>>(path: P, bytes: Vec<u8>) -> Self {
        let path = path.into();
        Self {
            name: symbol_name(&path),
            path,
            bytes,
        }
    }

    /// Reads a shader file from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| Error::ReadError(path.to_owned(), e))?;
        Ok(Self::new(path, bytes))
    }

    /// Symbol name of the generated array
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path that the shader was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw file contents
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length in bytes, which is also the declared array size
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Writes the array definition, e.g.
    /// ```text
    /// const char A_VERT[3] =
    /// "a\"\\";
    /// ```
    pub fn write_definition<W: Write>(&self, out: &mut W) -> Result<(), Error> {
        write!(out, "const char {}[{}] =\n\"", self.name, self.len())?;
        write_escaped(&self.bytes, out)?;
        out.write_all(b"\";\n")?;
        Ok(())
    }

    /// Writes the one-line `extern` declaration
    pub fn write_declaration<W: Write>(
        &self,
        out: &mut W,
    ) -> Result<(), Error> {
        writeln!(out, "extern const char {}[{}];", self.name, self.len())?;
        Ok(())
    }
}
