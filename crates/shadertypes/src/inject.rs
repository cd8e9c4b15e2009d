//! Constant injector: rewrites `const` declarations with new host-supplied
//! values, leaving every other byte of the source untouched.

use std::collections::HashMap;

use crate::constants::value_literal;
use crate::scan::constant_declarations;
use crate::types::{ConstValue, TypeError};

/// Replaces each constant whose name appears in `values` with a freshly
/// rendered declaration; names absent from the map keep their original
/// text, as does everything outside the matched statements (trailing
/// comments on the same line included).
///
/// Fails only when a mapped value cannot be rendered as the declared type.
pub fn inject_constants(
    source: &str,
    values: &HashMap<String, ConstValue>,
) -> Result<String, TypeError> {
    let mut out = String::with_capacity(source.len());
    let mut cursor = 0;
    for m in constant_declarations(source) {
        let Some(value) = values.get(m.name) else {
            continue;
        };
        let literal = value_literal(value, m.glsl_type)?;
        out.push_str(&source[cursor..m.span.start]);
        out.push_str(&format!(
            "{}const {} {} = {};",
            m.indent,
            m.glsl_type.keyword(),
            m.name,
            literal
        ));
        cursor = m.span.end;
    }
    out.push_str(&source[cursor..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(entries: &[(&str, ConstValue)]) -> HashMap<String, ConstValue> {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn rounds_floats_into_int_constants() {
        let map = values(&[("bar", ConstValue::Scalar(2.3))]);
        assert_eq!(
            inject_constants("const int bar = 0;", &map).unwrap(),
            "const int bar = 2;"
        );
        let map = values(&[("bar", ConstValue::Scalar(2.5))]);
        assert_eq!(
            inject_constants("const int bar = 0;", &map).unwrap(),
            "const int bar = 3;"
        );
    }

    #[test]
    fn whole_numbers_into_float_constants_keep_the_point() {
        let map = values(&[("val", ConstValue::Scalar(2.0))]);
        assert_eq!(
            inject_constants("const float val = 0.0;", &map).unwrap(),
            "const float val = 2.0;"
        );
    }

    #[test]
    fn unmapped_names_pass_through() {
        let source = "const float a = 1.0;\nconst float b = 2.0;\n";
        let map = values(&[("b", ConstValue::Scalar(5.5))]);
        assert_eq!(
            inject_constants(source, &map).unwrap(),
            "const float a = 1.0;\nconst float b = 5.5;\n"
        );

        let unknown = values(&[("missing", ConstValue::Scalar(1.0))]);
        assert_eq!(inject_constants(source, &unknown).unwrap(), source);
    }

    #[test]
    fn preserves_indentation_and_trailing_comments() {
        let source = "    const int bar = 0; // runtime\n";
        let map = values(&[("bar", ConstValue::Scalar(7.0))]);
        assert_eq!(
            inject_constants(source, &map).unwrap(),
            "    const int bar = 7; // runtime\n"
        );
    }

    #[test]
    fn injection_is_idempotent() {
        let source = "const vec2 uv = vec2(0.0);\nvoid main() {}\n";
        let map = values(&[("uv", ConstValue::Vector(vec![0.5, 1.0]))]);
        let once = inject_constants(source, &map).unwrap();
        let twice = inject_constants(&once, &map).unwrap();
        assert_eq!(once, "const vec2 uv = vec2(0.5, 1.0);\nvoid main() {}\n");
        assert_eq!(once, twice);
    }

    #[test]
    fn only_mapped_declaration_lines_change() {
        let source = "precision highp float;\nconst float a = 1.0;\n// const float a = 9.9;\nfloat helper() { return a; }\n";
        let map = values(&[("a", ConstValue::Scalar(3.5))]);
        let rewritten = inject_constants(source, &map).unwrap();
        for (before, after) in source.lines().zip(rewritten.lines()) {
            if before.starts_with("const float a") {
                assert_eq!(after, "const float a = 3.5;");
            } else {
                assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn shape_mismatch_fails_the_whole_call() {
        let map = values(&[("a", ConstValue::Bool(true))]);
        let err = inject_constants("const float a = 1.0;", &map).unwrap_err();
        assert!(matches!(err, TypeError::ValueShape { keyword: "float", .. }));
    }
}
