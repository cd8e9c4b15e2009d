//! Declaration scanner: finds `const` and `uniform` statements in GLSL
//! source without parsing the rest of the grammar.
//!
//! Both matchers are anchored regexes built from the type catalog, compiled
//! once and cached. Matching is read-only and restartable; a malformed
//! declaration simply does not match. Matches borrow the source string and
//! are produced lazily in source order.
//!
//! Types:
//!
//! - `ConstantMatch` carries the declared kind, variable name, leading
//!   whitespace, and the byte span of the whole statement so the injector
//!   can splice replacements without touching surrounding text.
//! - `UniformMatch` additionally carries the optional array arity; an
//!   all-digit bracket token is a literal length, any other identifier is a
//!   dynamic-length marker.

use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

use crate::types::{ArraySize, GlslType};

/// One matched `const <kind> <name> = ...;` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantMatch<'a> {
    pub glsl_type: GlslType,
    pub name: &'a str,
    /// Leading spaces/tabs, preserved verbatim by the injector.
    pub indent: &'a str,
    /// Byte range of the statement, from the indent through the `;`.
    pub span: Range<usize>,
}

/// One matched `uniform <kind> <name>[...];` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformMatch<'a> {
    pub glsl_type: GlslType,
    pub name: &'a str,
    pub indent: &'a str,
    /// `None` when no bracket suffix is present.
    pub array: Option<ArraySize>,
}

fn keyword_alternation(kinds: &[GlslType]) -> String {
    kinds
        .iter()
        .map(|kind| kind.keyword())
        .collect::<Vec<_>>()
        .join("|")
}

fn constant_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r"(?m)^([ \t]*)const ({}) (\w+) = .+?;",
            keyword_alternation(&GlslType::CONSTANT_KINDS)
        ))
        .expect("constant declaration pattern compiles")
    })
}

fn uniform_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r"(?m)^([ \t]*)uniform ({}) (\w+)(?:\[(\w+)\])?;",
            keyword_alternation(&GlslType::UNIFORM_KINDS)
        ))
        .expect("uniform declaration pattern compiles")
    })
}

/// Enumerates constant declarations in source order.
pub fn constant_declarations(source: &str) -> impl Iterator<Item = ConstantMatch<'_>> {
    constant_regex().captures_iter(source).filter_map(|caps| {
        let whole = caps.get(0)?;
        Some(ConstantMatch {
            glsl_type: GlslType::from_keyword(caps.get(2)?.as_str())?,
            name: caps.get(3)?.as_str(),
            indent: caps.get(1)?.as_str(),
            span: whole.range(),
        })
    })
}

/// Enumerates uniform declarations in source order.
pub fn uniform_declarations(source: &str) -> impl Iterator<Item = UniformMatch<'_>> {
    uniform_regex().captures_iter(source).filter_map(|caps| {
        Some(UniformMatch {
            glsl_type: GlslType::from_keyword(caps.get(2)?.as_str())?,
            name: caps.get(3)?.as_str(),
            indent: caps.get(1)?.as_str(),
            array: caps.get(4).map(|token| ArraySize::parse(token.as_str())),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_constants_in_source_order() {
        let source = "const float a = 1.0;\nvoid main() {}\n  const ivec2 b = ivec2(0);\n";
        let matches: Vec<_> = constant_declarations(source).collect();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].glsl_type, GlslType::Float);
        assert_eq!(matches[0].name, "a");
        assert_eq!(matches[0].indent, "");
        assert_eq!(matches[1].glsl_type, GlslType::IVec2);
        assert_eq!(matches[1].name, "b");
        assert_eq!(matches[1].indent, "  ");
    }

    #[test]
    fn span_stops_at_the_semicolon() {
        let source = "const int bar = 0; // runtime";
        let m = constant_declarations(source).next().unwrap();
        assert_eq!(&source[m.span.clone()], "const int bar = 0;");
    }

    #[test]
    fn malformed_declarations_do_not_match() {
        let source = "const float broken = 1.0\nconst vec5 nope = vec5(0);\nuniform float u\n";
        assert_eq!(constant_declarations(source).count(), 0);
        assert_eq!(uniform_declarations(source).count(), 0);
    }

    #[test]
    fn uint_constants_are_not_recognized() {
        assert_eq!(constant_declarations("const uint x = 0u;").count(), 0);
        assert_eq!(uniform_declarations("uniform uint x;").count(), 1);
    }

    #[test]
    fn uniform_array_suffixes() {
        let source = "uniform vec2 a;\nuniform vec2 b[4];\nuniform vec2 c[COUNT];\nuniform vec2 d[0];\n";
        let matches: Vec<_> = uniform_declarations(source).collect();
        assert_eq!(matches[0].array, None);
        assert_eq!(matches[1].array, Some(ArraySize::Fixed(4)));
        assert_eq!(matches[2].array, Some(ArraySize::Dynamic));
        assert_eq!(matches[3].array, Some(ArraySize::Fixed(0)));
    }

    #[test]
    fn samplers_match_as_uniforms() {
        let source = "uniform sampler2D tex;\nuniform samplerCube env;\n";
        let kinds: Vec<_> = uniform_declarations(source)
            .map(|m| m.glsl_type)
            .collect();
        assert_eq!(kinds, vec![GlslType::Sampler2D, GlslType::SamplerCube]);
    }

    #[test]
    fn mid_line_declarations_are_ignored() {
        let source = "int x = 0; const float a = 1.0;";
        assert_eq!(constant_declarations(source).count(), 0);
    }
}
