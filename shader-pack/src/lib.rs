//! Packs shader source files into a pair of C source files, so that shaders
//! can be compiled into a program as string constants instead of being loaded
//! at runtime.
//!
//! Each shader becomes a `const char` array whose name comes from the shader's
//! file name (see [`symbol_name`]) and whose size is the exact byte length of
//! the file, so `sizeof()` works on it.  For a single input
//! `shaders/triangle.vert`, the declarations file contains
//! ```text
//! // This file is automatically generated.
//! extern const char TRIANGLE_VERT[N];
//! ```
//! and the definitions file contains
//! ```text
//! // This file is automatically generated.
//! #include "tcm/packed_shaders.h"
//! const char TRIANGLE_VERT[N] =
//! "...escaped shader text...";
//! ```
//!
//! Generating both files from memory:
//! ```
//! use shader_pack::{Settings, ShaderAsset, ShaderPack};
//!
//! let pack = ShaderPack::from_assets(vec![ShaderAsset::new(
//!     "shaders/a.vert",
//!     b"a\"\\".to_vec(),
//! )])?;
//!
//! let mut h = vec![];
//! pack.write_declarations(&mut h)?;
//! assert_eq!(
//!     h,
//!     b"// This file is automatically generated.\n\
//!       extern const char A_VERT[3];\n"
//! );
//!
//! let mut c = vec![];
//! pack.write_definitions(&mut c, &Settings::default())?;
//! assert!(c.ends_with(b"const char A_VERT[3] =\n\"a\\\"\\\\\";\n"));
//! # Ok::<(), shader_pack::Error>(())
//! ```
pub mod asset;
pub mod escape;
pub mod name;
pub mod pack;

mod error;
pub use error::Error;

pub use asset::ShaderAsset;
pub use escape::{escape, write_escaped};
pub use name::{is_valid_identifier, symbol_name};
pub use pack::{DEFAULT_INCLUDE, Diagnostic, HEADER, Settings, ShaderPack};
