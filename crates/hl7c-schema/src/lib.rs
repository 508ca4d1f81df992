//! Schema validation and Go code emission for HL7 message models.
//!
//! `hl7c-schema` reads a YAML description of message models and reusable
//! composite types, validates it, and emits Go structs that can unmarshal
//! JSON-tagged representations of HL7 messages.
//!
//! # Architecture
//!
//! ```text
//! Input            Config               Output
//! ─────────     ─────────────     ──────────────────────
//! YAML bytes ──> load ──> sanitize ──> lower ──> GoFile ──> GoWriter ──> Go source
//!               (input)  (sanitize)   (output::go)  (output::syntax)
//! ```
//!
//! # Example
//!
//! ```
//! use hl7c_schema::{input, output};
//!
//! let yaml = r#"
//! meta:
//!   package: objects
//! models:
//!   - name: patient
//!     fields:
//!       - name: dob
//!         type: timestamp
//!         tag: PID.7
//! "#;
//!
//! let config = input::load(yaml.as_bytes(), None).unwrap();
//! let go = output::generate_go(&config);
//! assert!(go.contains("type Patient struct"));
//! assert!(go.contains("func (m *Patient) UnmarshalJSON(b []byte) error"));
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod resolve;
pub mod sanitize;

pub use config::{Config, CustomType, Field, Meta, Model};
pub use error::ConfigError;
pub use input::{DEFAULT_IMPORTS, decode, load, read};
pub use output::generate_go;
pub use resolve::{Resolved, TimeLayout, TypeClass, resolve};
pub use sanitize::{capitalize, sanitize};
