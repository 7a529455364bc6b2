//! Sets of shaders and the generated definitions / declarations files
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::{Error, ShaderAsset, name::is_valid_identifier};

/// First line of both generated files
pub const HEADER: &str = "// This file is automatically generated.\n";

/// Include reference written at the top of the definitions file by default
pub const DEFAULT_INCLUDE: &str = "tcm/packed_shaders.h";

/// Settings for generating output files
#[derive(Clone, Debug)]
pub struct Settings {
    /// Logical name of the declarations file, as written on the `#include`
    /// line of the definitions file
    pub include: String,

    /// Refuse to write output if [`ShaderPack::diagnostics`] finds anything
    pub strict: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            include: DEFAULT_INCLUDE.to_owned(),
            strict: false,
        }
    }
}

/// A problem with derived symbol names
///
/// These never change the generated output; they are reported so that the
/// caller can warn or bail out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// Two shaders map to the same symbol
    Collision {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },
    /// The symbol is empty or starts with a digit
    InvalidIdentifier { name: String, path: PathBuf },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Diagnostic::Collision {
                name,
                first,
                second,
            } => write!(
                f,
                "{first:?} and {second:?} both produce the symbol `{name}`"
            ),
            Diagnostic::InvalidIdentifier { name, path } => {
                write!(f, "{path:?} produces invalid identifier `{name}`")
            }
        }
    }
}

/// An ordered set of shaders
///
/// Shaders are kept sorted by path string, so output doesn't depend on the
/// order in which inputs were given.
#[derive(Clone, Debug)]
pub struct ShaderPack {
    shaders: Vec<ShaderAsset>,
}

impl ShaderPack {
    /// Loads every shader in `paths`
    ///
    /// Paths are sorted by their raw string (byte order), not by component,
    /// then read in that order.  Reading stops at the first failure.
    pub fn load<I, P>(paths: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut paths: Vec<PathBuf> =
            paths.into_iter().map(|p| p.as_ref().to_owned()).collect();
        if paths.is_empty() {
            return Err(Error::NoShaders);
        }
        paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
        let shaders = paths
            .iter()
            .map(ShaderAsset::load)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { shaders })
    }

    /// Builds a pack from shaders already in memory, sorting them by path
    pub fn from_assets(mut shaders: Vec<ShaderAsset>) -> Result<Self, Error> {
        if shaders.is_empty() {
            return Err(Error::NoShaders);
        }
        shaders.sort_by(|a, b| a.path().as_os_str().cmp(b.path().as_os_str()));
        Ok(Self { shaders })
    }

    /// Shaders in output order
    pub fn shaders(&self) -> &[ShaderAsset] {
        &self.shaders
    }

    pub fn len(&self) -> usize {
        self.shaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shaders.is_empty()
    }

    /// Checks for colliding or invalid symbol names
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut out = vec![];
        let mut seen: HashMap<&str, &Path> = HashMap::new();
        for s in &self.shaders {
            if !is_valid_identifier(s.name()) {
                out.push(Diagnostic::InvalidIdentifier {
                    name: s.name().to_owned(),
                    path: s.path().to_owned(),
                });
            }
            if let Some(first) = seen.get(s.name()) {
                out.push(Diagnostic::Collision {
                    name: s.name().to_owned(),
                    first: first.to_path_buf(),
                    second: s.path().to_owned(),
                });
            } else {
                seen.insert(s.name(), s.path());
            }
        }
        out
    }

    /// Writes the definitions (`.c`) file
    pub fn write_definitions<W: Write>(
        &self,
        out: &mut W,
        settings: &Settings,
    ) -> Result<(), Error> {
        // Escaping does many small writes, so buffer them
        let mut out = BufWriter::new(out);
        out.write_all(HEADER.as_bytes())?;
        writeln!(out, "#include \"{}\"", settings.include)?;
        for s in &self.shaders {
            s.write_definition(&mut out)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Writes the declarations (`.h`) file
    pub fn write_declarations<W: Write>(
        &self,
        out: &mut W,
    ) -> Result<(), Error> {
        let mut out = BufWriter::new(out);
        out.write_all(HEADER.as_bytes())?;
        for s in &self.shaders {
            s.write_declaration(&mut out)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Writes both output files, definitions first
    ///
    /// Existing files are overwritten.  If writing the declarations file
    /// fails, the definitions file stays on disk.
    pub fn write_files<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        out_c: P,
        out_h: Q,
        settings: &Settings,
    ) -> Result<(), Error> {
        if settings.strict {
            let ds = self.diagnostics();
            if !ds.is_empty() {
                return Err(Error::Diagnostics(ds));
            }
        }
        write_file(out_c.as_ref(), |f| self.write_definitions(f, settings))?;
        write_file(out_h.as_ref(), |f| self.write_declarations(f))?;
        Ok(())
    }
}

/// Creates `path` and runs `f` on it, tagging any IO error with the path
fn write_file<F>(path: &Path, f: F) -> Result<(), Error>
where
    F: FnOnce(&mut File) -> Result<(), Error>,
{
    let mut file =
        File::create(path).map_err(|e| Error::WriteError(path.to_owned(), e))?;
    f(&mut file).map_err(|e| match e {
        Error::IoError(e) => Error::WriteError(path.to_owned(), e),
        e => e,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn pack(files: &[(&str, &[u8])]) -> ShaderPack {
        ShaderPack::from_assets(
            files
                .iter()
                .map(|(p, b)| ShaderAsset::new(*p, b.to_vec()))
                .collect(),
        )
        .unwrap()
    }

    fn definitions(p: &ShaderPack, settings: &Settings) -> String {
        let mut out = vec![];
        p.write_definitions(&mut out, settings).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn declarations(p: &ShaderPack) -> String {
        let mut out = vec![];
        p.write_declarations(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_pack() {
        assert!(matches!(
            ShaderPack::from_assets(vec![]),
            Err(Error::NoShaders)
        ));
        let paths: [&str; 0] = [];
        assert!(matches!(ShaderPack::load(paths), Err(Error::NoShaders)));
    }

    #[test]
    fn sorted_by_path_string() {
        // Component-wise ordering would put "a/z.vert" first
        let p = pack(&[
            ("a/z.vert", b"1"),
            ("a-b.vert", b"2"),
            ("B.vert", b"3"),
        ]);
        let names: Vec<_> = p.shaders().iter().map(|s| s.name()).collect();
        assert_eq!(names, ["B_VERT", "A_B_VERT", "Z_VERT"]);
    }

    #[test]
    fn output_format() {
        let p = pack(&[("s/b.frag", b"x\n"), ("s/a.vert", b"a\"\\")]);
        assert_eq!(
            definitions(&p, &Settings::default()),
            "// This file is automatically generated.\n\
             #include \"tcm/packed_shaders.h\"\n\
             const char A_VERT[3] =\n\"a\\\"\\\\\";\n\
             const char B_FRAG[2] =\n\"x\\n\";\n"
        );
        assert_eq!(
            declarations(&p),
            "// This file is automatically generated.\n\
             extern const char A_VERT[3];\n\
             extern const char B_FRAG[2];\n"
        );
    }

    #[test]
    fn custom_include() {
        let p = pack(&[("a.vert", b"")]);
        let settings = Settings {
            include: "gen/shaders.h".to_owned(),
            ..Settings::default()
        };
        let out = definitions(&p, &settings);
        assert!(out.contains("\n#include \"gen/shaders.h\"\n"), "{out}");
    }

    #[test]
    fn clean_names() {
        let p = pack(&[("a.vert", b""), ("a.frag", b"")]);
        assert!(p.diagnostics().is_empty());
    }

    #[test]
    fn collisions_are_reported_not_fixed() {
        let p = pack(&[("x/blit.comp", b"1"), ("y/blit.comp", b"22")]);
        assert_eq!(
            p.diagnostics(),
            [Diagnostic::Collision {
                name: "BLIT_COMP".to_owned(),
                first: "x/blit.comp".into(),
                second: "y/blit.comp".into(),
            }]
        );
        assert_eq!(
            declarations(&p),
            "// This file is automatically generated.\n\
             extern const char BLIT_COMP[1];\n\
             extern const char BLIT_COMP[2];\n"
        );
    }

    #[test]
    fn invalid_identifier() {
        let p = pack(&[("3d.vert", b"")]);
        assert_eq!(
            p.diagnostics(),
            [Diagnostic::InvalidIdentifier {
                name: "3D_VERT".to_owned(),
                path: "3d.vert".into(),
            }]
        );
        assert!(declarations(&p).contains("extern const char 3D_VERT[0];"));
    }
}
