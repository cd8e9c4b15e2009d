//! Core vocabulary shared by the scanner and both engines: the closed GLSL
//! type catalog, uniform array arities, host-side constant values, and the
//! error type every fallible entry point returns.
//!
//! Types:
//!
//! - `GlslType` enumerates every scalar, vector, matrix, and sampler kind the
//!   scanner recognizes; the catalog is closed so unknown keywords never reach
//!   the engines.
//! - `ArraySize` distinguishes literal uniform array lengths from symbolic
//!   (unknown at scan time) ones.
//! - `ConstValue` is the host value accepted by the constant injector.
//! - `TypeError` classifies the two ways a translation call can fail.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A GLSL type the declaration scanner recognizes.
///
/// `Uint` and the sampler kinds are uniform-only: they never appear in
/// [`CONSTANT_KINDS`](GlslType::CONSTANT_KINDS) and the constant engine
/// rejects them with [`TypeError::Unsupported`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GlslType {
    #[serde(rename = "bool")]
    Bool,
    #[serde(rename = "int")]
    Int,
    #[serde(rename = "uint")]
    Uint,
    #[serde(rename = "float")]
    Float,
    #[serde(rename = "bvec2")]
    BVec2,
    #[serde(rename = "bvec3")]
    BVec3,
    #[serde(rename = "bvec4")]
    BVec4,
    #[serde(rename = "ivec2")]
    IVec2,
    #[serde(rename = "ivec3")]
    IVec3,
    #[serde(rename = "ivec4")]
    IVec4,
    #[serde(rename = "vec2")]
    Vec2,
    #[serde(rename = "vec3")]
    Vec3,
    #[serde(rename = "vec4")]
    Vec4,
    #[serde(rename = "mat2")]
    Mat2,
    #[serde(rename = "mat3")]
    Mat3,
    #[serde(rename = "mat4")]
    Mat4,
    #[serde(rename = "sampler2D")]
    Sampler2D,
    #[serde(rename = "samplerCube")]
    SamplerCube,
}

impl GlslType {
    /// Kinds legal in a `const` declaration.
    pub const CONSTANT_KINDS: [GlslType; 15] = [
        GlslType::Bool,
        GlslType::Int,
        GlslType::Float,
        GlslType::BVec2,
        GlslType::BVec3,
        GlslType::BVec4,
        GlslType::IVec2,
        GlslType::IVec3,
        GlslType::IVec4,
        GlslType::Vec2,
        GlslType::Vec3,
        GlslType::Vec4,
        GlslType::Mat2,
        GlslType::Mat3,
        GlslType::Mat4,
    ];

    /// Kinds legal in a `uniform` declaration.
    pub const UNIFORM_KINDS: [GlslType; 18] = [
        GlslType::Bool,
        GlslType::Int,
        GlslType::Uint,
        GlslType::Float,
        GlslType::BVec2,
        GlslType::BVec3,
        GlslType::BVec4,
        GlslType::IVec2,
        GlslType::IVec3,
        GlslType::IVec4,
        GlslType::Vec2,
        GlslType::Vec3,
        GlslType::Vec4,
        GlslType::Mat2,
        GlslType::Mat3,
        GlslType::Mat4,
        GlslType::Sampler2D,
        GlslType::SamplerCube,
    ];

    /// The GLSL source keyword for this kind.
    pub fn keyword(self) -> &'static str {
        match self {
            GlslType::Bool => "bool",
            GlslType::Int => "int",
            GlslType::Uint => "uint",
            GlslType::Float => "float",
            GlslType::BVec2 => "bvec2",
            GlslType::BVec3 => "bvec3",
            GlslType::BVec4 => "bvec4",
            GlslType::IVec2 => "ivec2",
            GlslType::IVec3 => "ivec3",
            GlslType::IVec4 => "ivec4",
            GlslType::Vec2 => "vec2",
            GlslType::Vec3 => "vec3",
            GlslType::Vec4 => "vec4",
            GlslType::Mat2 => "mat2",
            GlslType::Mat3 => "mat3",
            GlslType::Mat4 => "mat4",
            GlslType::Sampler2D => "sampler2D",
            GlslType::SamplerCube => "samplerCube",
        }
    }

    /// Looks a keyword up in the full catalog.
    pub fn from_keyword(keyword: &str) -> Option<GlslType> {
        Self::UNIFORM_KINDS
            .into_iter()
            .find(|kind| kind.keyword() == keyword)
    }
}

impl std::fmt::Display for GlslType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Array arity of a uniform declaration.
///
/// Absence of an array suffix is modelled as `Option<ArraySize>::None` on the
/// match itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArraySize {
    /// A literal length, e.g. `uniform vec2 lights[4];`.
    Fixed(usize),
    /// A symbolic length, e.g. `uniform vec2 lights[COUNT];`.
    Dynamic,
}

impl ArraySize {
    /// Interprets the token between the brackets: all-digit tokens are
    /// literal lengths, anything else is a dynamic-length marker.
    pub fn parse(token: &str) -> ArraySize {
        token.parse::<usize>().map_or(ArraySize::Dynamic, ArraySize::Fixed)
    }
}

/// A host-supplied value for a constant declaration.
///
/// The untagged serde representation lets JSON maps deserialize naturally:
/// `true`, `2.5`, `[1, 2]`, `[true, false]`, `[[1, 0], [0, 1]]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConstValue {
    Bool(bool),
    Scalar(f64),
    BoolVector(Vec<bool>),
    Vector(Vec<f64>),
    Matrix(Vec<Vec<f64>>),
}

impl ConstValue {
    pub(crate) fn shape_name(&self) -> &'static str {
        match self {
            ConstValue::Bool(_) => "bool",
            ConstValue::Scalar(_) => "scalar",
            ConstValue::BoolVector(_) => "bool vector",
            ConstValue::Vector(_) => "vector",
            ConstValue::Matrix(_) => "matrix",
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum TypeError {
    #[error("type {0} is not supported")]
    Unsupported(String),

    #[error("a {given} value cannot initialize a {keyword} constant")]
    ValueShape { keyword: &'static str, given: String },
}
