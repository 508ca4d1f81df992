//! Code emission.
//!
//! A sanitized [`Config`](crate::Config) is lowered into a Go syntax tree
//! ([`syntax`]) and rendered by [`GoWriter`].

pub mod go;
pub mod syntax;

pub use go::{BASE_STRUCT, GoWriter, generate_go, lower};
pub use syntax::{Decl, GoFile, ShadowField, StructDecl, StructField, UnmarshalFn};
