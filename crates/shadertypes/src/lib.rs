//! Translation layer between GLSL shader source and TypeScript host code.
//!
//! Given flattened shader text, this crate scans the two declaration shapes
//! it understands (`const <type> <name> = ...;` and
//! `uniform <type> <name>[N];`), computes the TypeScript types a host
//! program may legally supply for them, renders whole ambient module
//! declarations, and rewrites constant initializers with new host values.
//!
//! Everything is pure string-to-string: no I/O, no global state beyond the
//! cached declaration regexes, and per-call configuration (the
//! [`TypeLibrary`]) is always passed explicitly so unrelated calls cannot
//! leak into each other.

mod constants;
mod declaration;
mod fmt;
mod inject;
mod scan;
mod types;
mod uniforms;

pub use declaration::module_declaration;
pub use inject::inject_constants;
pub use scan::{constant_declarations, uniform_declarations, ConstantMatch, UniformMatch};
pub use types::{ArraySize, ConstValue, GlslType, TypeError};
pub use uniforms::{LibraryType, TypeLibrary};

pub use constants::{type_expression as constant_type, value_literal};
pub use uniforms::type_expression as uniform_type;
