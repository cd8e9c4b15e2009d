//! Constant engine: maps each constant-legal kind to its TypeScript type
//! expression, and renders host values back into GLSL literal syntax.
//!
//! Formatting rules follow the shader grammar exactly: integers are rounded
//! half-up and printed without a fraction, floats with a whole-number value
//! gain an explicit trailing `.0`, vectors and matrices render as their
//! constructor call with elements joined by `", "`. Output is deterministic
//! for a given `(value, kind)` pair.

use crate::fmt::{matrix_of, paren_inline, tuple_of};
use crate::types::{ConstValue, GlslType, TypeError};

/// The TypeScript type a host value for this constant kind must satisfy.
///
/// Fails with [`TypeError::Unsupported`] for uniform-only kinds (`uint` and
/// the samplers), which have no constant form.
pub fn type_expression(kind: GlslType) -> Result<String, TypeError> {
    let expr = match kind {
        GlslType::Bool => "boolean".to_string(),
        GlslType::Int | GlslType::Float => "number".to_string(),
        GlslType::BVec2 => tuple_of(2, "boolean"),
        GlslType::BVec3 => tuple_of(3, "boolean"),
        GlslType::BVec4 => tuple_of(4, "boolean"),
        GlslType::IVec2 | GlslType::Vec2 => tuple_of(2, "number"),
        GlslType::IVec3 | GlslType::Vec3 => tuple_of(3, "number"),
        GlslType::IVec4 | GlslType::Vec4 => tuple_of(4, "number"),
        GlslType::Mat2 => matrix_of(2),
        GlslType::Mat3 => matrix_of(3),
        GlslType::Mat4 => matrix_of(4),
        GlslType::Uint | GlslType::Sampler2D | GlslType::SamplerCube => {
            return Err(TypeError::Unsupported(kind.keyword().to_string()))
        }
    };
    Ok(expr)
}

/// Renders `value` as the GLSL literal for a constant of the given kind.
pub fn value_literal(value: &ConstValue, kind: GlslType) -> Result<String, TypeError> {
    match (kind, value) {
        (GlslType::Bool, ConstValue::Bool(flag)) => Ok(flag.to_string()),
        (GlslType::Int, ConstValue::Scalar(x)) => Ok(format_int(*x)),
        (GlslType::Float, ConstValue::Scalar(x)) => Ok(format_float(*x)),

        (GlslType::BVec2 | GlslType::BVec3 | GlslType::BVec4, ConstValue::BoolVector(flags)) => {
            let elements = expect_len(kind, flags)?
                .iter()
                .map(|flag| flag.to_string())
                .collect();
            Ok(constructor(kind, elements))
        }
        (GlslType::IVec2 | GlslType::IVec3 | GlslType::IVec4, ConstValue::Vector(xs)) => {
            let elements = expect_len(kind, xs)?.iter().copied().map(format_int).collect();
            Ok(constructor(kind, elements))
        }
        (GlslType::Vec2 | GlslType::Vec3 | GlslType::Vec4, ConstValue::Vector(xs)) => {
            let elements = expect_len(kind, xs)?.iter().copied().map(format_float).collect();
            Ok(constructor(kind, elements))
        }
        (GlslType::Mat2 | GlslType::Mat3 | GlslType::Mat4, ConstValue::Matrix(rows)) => {
            let order = arity(kind);
            if rows.len() != order || rows.iter().any(|row| row.len() != order) {
                return Err(shape_error(kind, value));
            }
            let elements = rows
                .iter()
                .flat_map(|row| row.iter().copied().map(format_float))
                .collect();
            Ok(constructor(kind, elements))
        }

        (GlslType::Uint | GlslType::Sampler2D | GlslType::SamplerCube, _) => {
            Err(TypeError::Unsupported(kind.keyword().to_string()))
        }
        _ => Err(shape_error(kind, value)),
    }
}

/// Rounds half toward positive infinity, matching GLSL host tooling
/// conventions: `2.5` becomes `3`, `-2.5` becomes `-2`.
fn format_int(x: f64) -> String {
    ((x + 0.5).floor() as i64).to_string()
}

/// Whole-number floats keep an explicit `.0`; everything else prints in its
/// shortest round-trip decimal form.
fn format_float(x: f64) -> String {
    if x.fract() == 0.0 {
        format!("{x:.1}")
    } else {
        format!("{x}")
    }
}

fn constructor(kind: GlslType, elements: Vec<String>) -> String {
    format!("{}{}", kind.keyword(), paren_inline(&elements))
}

fn arity(kind: GlslType) -> usize {
    match kind {
        GlslType::BVec2 | GlslType::IVec2 | GlslType::Vec2 | GlslType::Mat2 => 2,
        GlslType::BVec3 | GlslType::IVec3 | GlslType::Vec3 | GlslType::Mat3 => 3,
        GlslType::BVec4 | GlslType::IVec4 | GlslType::Vec4 | GlslType::Mat4 => 4,
        _ => 1,
    }
}

fn expect_len<'a, T>(kind: GlslType, elements: &'a [T]) -> Result<&'a [T], TypeError> {
    if elements.len() == arity(kind) {
        Ok(elements)
    } else {
        Err(TypeError::ValueShape {
            keyword: kind.keyword(),
            given: format!("{}-element vector", elements.len()),
        })
    }
}

fn shape_error(kind: GlslType, value: &ConstValue) -> TypeError {
    TypeError::ValueShape {
        keyword: kind.keyword(),
        given: value.shape_name().to_string(),
    }
}
