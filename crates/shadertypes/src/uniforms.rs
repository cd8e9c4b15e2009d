//! Uniform engine: computes the full union of host types a uniform
//! declaration accepts, folding in array arity and an optional caller-supplied
//! type library.
//!
//! Every native representation is tagged up front as standalone (a flat
//! buffer that already covers a whole array, never wrapped) or repeatable
//! (wrapped per element when an arity is present); repeatable forms are
//! further split into tuple-shaped and naked unions. The tagging lives in an
//! explicit per-kind table rather than being inferred from the rendered
//! text, so adding a catalog kind forces a conscious classification.
//!
//! Types:
//!
//! - `TypeLibrary` is the per-call configuration mapping kinds to third-party
//!   representations; it deserializes from TOML/JSON and is never mutated.
//! - `LibraryType` is either a bare type name or an alias introducing a new
//!   named type with a structural shape.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::fmt::{array_of, tuple_of};
use crate::types::{ArraySize, GlslType};

/// A caller-supplied table of third-party value representations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeLibrary {
    /// Namespace qualifying alias references (`THREE.Vector2`); bare names
    /// are never qualified.
    #[serde(default)]
    pub namespace: Option<String>,
    /// Whether the library's types may be nested into array wrappers. When
    /// false the library has no array representation and its entries are
    /// omitted for array uniforms.
    #[serde(default)]
    pub nesting: bool,
    #[serde(default)]
    pub types: HashMap<GlslType, Vec<LibraryType>>,
}

/// One third-party representation for a given kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LibraryType {
    /// An existing type name used as-is.
    Name(String),
    /// A new named type whose definition is `shape`.
    Alias { alias: String, shape: String },
}

impl LibraryType {
    pub(crate) fn reference(&self, namespace: Option<&str>) -> String {
        match self {
            LibraryType::Name(name) => name.clone(),
            LibraryType::Alias { alias, .. } => match namespace {
                Some(ns) => format!("{ns}.{alias}"),
                None => alias.clone(),
            },
        }
    }
}

impl TypeLibrary {
    /// Alias definitions this library introduces for the given kind, in
    /// declaration order.
    pub(crate) fn aliases(&self, kind: GlslType) -> impl Iterator<Item = (&str, &str)> {
        self.types
            .get(&kind)
            .map(|entries| entries.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(|entry| match entry {
                LibraryType::Alias { alias, shape } => Some((alias.as_str(), shape.as_str())),
                LibraryType::Name(_) => None,
            })
    }

    /// The built-in THREE.js library: vectors, colors, quaternions,
    /// matrices, and textures under the `THREE` namespace, with nesting
    /// enabled.
    pub fn three() -> TypeLibrary {
        let alias = |alias: &str, shape: &str| LibraryType::Alias {
            alias: alias.to_string(),
            shape: shape.to_string(),
        };
        let types = HashMap::from([
            (
                GlslType::Vec2,
                vec![alias("Vector2", "{ x: number, y: number, isVector2: true }")],
            ),
            (
                GlslType::Vec3,
                vec![
                    alias("Vector3", "{ x: number, y: number, z: number, isVector3: true }"),
                    alias("Color", "{ r: number, g: number, b: number, isColor: true }"),
                ],
            ),
            (
                GlslType::Vec4,
                vec![
                    alias(
                        "Vector4",
                        "{ x: number, y: number, z: number, w: number, isVector4: true }",
                    ),
                    alias(
                        "Quaternion",
                        "{ x: number, y: number, z: number, w: number, isQuaternion: true }",
                    ),
                ],
            ),
            (GlslType::Mat2, vec![LibraryType::Name(crate::fmt::matrix_of(2))]),
            (
                GlslType::Mat3,
                vec![
                    LibraryType::Name(crate::fmt::matrix_of(3)),
                    alias("Matrix3", "{ elements: number[], setFromMatrix4: unknown }"),
                ],
            ),
            (
                GlslType::Mat4,
                vec![
                    LibraryType::Name(crate::fmt::matrix_of(4)),
                    alias("Matrix4", "{ elements: number[], setFromMatrix3: unknown }"),
                ],
            ),
            (
                GlslType::Sampler2D,
                vec![alias(
                    "Texture",
                    "{ image: unknown, isTexture: true, isCubeTexture?: never }",
                )],
            ),
            (
                GlslType::SamplerCube,
                vec![alias(
                    "CubeTexture",
                    "{ images: unknown, isTexture: true, isCubeTexture: true }",
                )],
            ),
        ]);
        TypeLibrary {
            namespace: Some("THREE".to_string()),
            nesting: true,
            types,
        }
    }
}

/// A native host representation, tagged with its arity-expansion behavior.
#[derive(Debug, Clone, Copy)]
enum NativeRepr {
    /// A bare union member such as `boolean`; wrapped as a whole when an
    /// arity is present.
    Naked(&'static str),
    /// An explicit fixed-length sequence; offered both nested and flattened
    /// for literal arities.
    Tuple { len: usize, elem: &'static str },
    /// A flat buffer covering the whole value, arrays included; never
    /// wrapped.
    Standalone(&'static str),
}

fn native_reprs(kind: GlslType) -> &'static [NativeRepr] {
    use NativeRepr::{Naked, Standalone, Tuple};
    match kind {
        GlslType::Bool => &[Naked("boolean"), Naked("number")],
        GlslType::Int | GlslType::Uint | GlslType::Float => &[Naked("number")],

        GlslType::BVec2 | GlslType::IVec2 => {
            &[Tuple { len: 2, elem: "number" }, Standalone("Int32Array")]
        }
        GlslType::BVec3 | GlslType::IVec3 => {
            &[Tuple { len: 3, elem: "number" }, Standalone("Int32Array")]
        }
        GlslType::BVec4 | GlslType::IVec4 => {
            &[Tuple { len: 4, elem: "number" }, Standalone("Int32Array")]
        }

        GlslType::Vec2 => &[Tuple { len: 2, elem: "number" }, Standalone("Float32Array")],
        GlslType::Vec3 => &[Tuple { len: 3, elem: "number" }, Standalone("Float32Array")],
        GlslType::Vec4 => &[Tuple { len: 4, elem: "number" }, Standalone("Float32Array")],

        GlslType::Mat2 => &[Tuple { len: 4, elem: "number" }, Standalone("Float32Array")],
        GlslType::Mat3 => &[Tuple { len: 9, elem: "number" }, Standalone("Float32Array")],
        GlslType::Mat4 => &[Tuple { len: 16, elem: "number" }, Standalone("Float32Array")],

        GlslType::Sampler2D | GlslType::SamplerCube => &[Naked("WebGLTexture")],
    }
}

/// The full union of host types accepted for a uniform of this kind.
///
/// Ordering is fixed and byte-stable: naked unions first, then flattened
/// tuples, standalone buffers, wrapped tuples, and library types last. The
/// closed catalog makes every kind uniform-legal, so this never fails.
pub fn type_expression(
    kind: GlslType,
    array: Option<ArraySize>,
    library: &TypeLibrary,
) -> String {
    let natives = native_reprs(kind);
    let library_refs: Vec<String> = library
        .types
        .get(&kind)
        .map(|entries| {
            entries
                .iter()
                .map(|entry| entry.reference(library.namespace.as_deref()))
                .collect()
        })
        .unwrap_or_default();

    // A literal zero length carries no array semantics.
    let array = match array {
        Some(ArraySize::Fixed(0)) => None,
        other => other,
    };

    let naked: Vec<&str> = natives
        .iter()
        .filter_map(|repr| match repr {
            NativeRepr::Naked(name) => Some(*name),
            _ => None,
        })
        .collect();
    let tuples: Vec<(usize, &str)> = natives
        .iter()
        .filter_map(|repr| match repr {
            NativeRepr::Tuple { len, elem } => Some((*len, *elem)),
            _ => None,
        })
        .collect();
    let standalone: Vec<&str> = natives
        .iter()
        .filter_map(|repr| match repr {
            NativeRepr::Standalone(name) => Some(*name),
            _ => None,
        })
        .collect();

    let mut parts: Vec<String> = Vec::new();
    match array {
        None => {
            parts.extend(naked.iter().map(|name| name.to_string()));
            parts.extend(tuples.iter().map(|&(len, elem)| tuple_of(len, elem)));
            parts.extend(standalone.iter().map(|name| name.to_string()));
            parts.extend(library_refs);
        }
        Some(ArraySize::Fixed(n)) => {
            if !naked.is_empty() {
                parts.push(tuple_of(n, &naked.join(" | ")));
            }
            parts.extend(tuples.iter().map(|&(len, elem)| tuple_of(len * n, elem)));
            parts.extend(standalone.iter().map(|name| name.to_string()));
            parts.extend(
                tuples
                    .iter()
                    .map(|&(len, elem)| tuple_of(n, &tuple_of(len, elem))),
            );
            if library.nesting {
                parts.extend(library_refs.iter().map(|name| tuple_of(n, name)));
            }
        }
        Some(ArraySize::Dynamic) => {
            if !naked.is_empty() {
                parts.push(array_of(&naked.join(" | ")));
            }
            parts.extend(standalone.iter().map(|name| name.to_string()));
            parts.extend(
                tuples
                    .iter()
                    .map(|&(len, elem)| array_of(&tuple_of(len, elem))),
            );
            if library.nesting {
                parts.extend(library_refs.iter().map(|name| array_of(name)));
            }
        }
    }
    parts.join(" | ")
}
