//! Ambient declaration renderer: assembles the engines' type expressions
//! into the text of one `declare module` block per shader.
//!
//! The layout is part of the external contract and reproduced bit-exact:
//! the module constant, an optional `inject` signature (present iff the
//! shader declares constants), library alias definitions (deduplicated by
//! declared kind across the whole file, wrapped in a `namespace` block when
//! the library declares one), an optional `Uniforms` map, and the export
//! list.

use crate::constants;
use crate::fmt::{capitalize, curly_inline, curly_pad, display_name};
use crate::scan::{constant_declarations, uniform_declarations};
use crate::types::{GlslType, TypeError};
use crate::uniforms::{self, TypeLibrary};

/// Renders the ambient module declaration for one flattened shader source.
///
/// `module_id` is the import specifier host code uses; the exported
/// identifier is its display name. Passing `generate_uniforms = false`
/// skips the uniform scan and every uniform-derived clause.
pub fn module_declaration(
    source: &str,
    module_id: &str,
    library: Option<&TypeLibrary>,
    generate_uniforms: bool,
) -> Result<String, TypeError> {
    let fallback = TypeLibrary::default();
    let library = library.unwrap_or(&fallback);
    let name = display_name(module_id);

    let constants: Vec<String> = constant_declarations(source)
        .map(|m| {
            Ok(format!(
                "{}?: {}",
                m.name,
                constants::type_expression(m.glsl_type)?
            ))
        })
        .collect::<Result<_, TypeError>>()?;

    let (uniform_entries, alias_defs) = if generate_uniforms {
        let matches: Vec<_> = uniform_declarations(source).collect();
        let entries = matches
            .iter()
            .map(|m| {
                format!(
                    "{}: {}",
                    m.name,
                    uniforms::type_expression(m.glsl_type, m.array, library)
                )
            })
            .collect();

        // The first uniform of a kind defines its aliases; later ones only
        // reference them.
        let mut seen: Vec<GlslType> = Vec::new();
        let mut aliases = Vec::new();
        for m in &matches {
            if seen.contains(&m.glsl_type) {
                continue;
            }
            seen.push(m.glsl_type);
            for (alias, shape) in library.aliases(m.glsl_type) {
                aliases.push(format!("type {alias} = {shape};"));
            }
        }
        (entries, aliases)
    } else {
        (Vec::new(), Vec::new())
    };

    let mut body = vec![format!("const {name}: string;")];
    if !constants.is_empty() {
        body.push(format!(
            "const inject: (map: {}) => string;",
            curly_inline(&constants)
        ));
    }
    if !alias_defs.is_empty() {
        match &library.namespace {
            Some(ns) => {
                let exported: Vec<String> = alias_defs
                    .iter()
                    .map(|def| format!("export {def}"))
                    .collect();
                body.push(format!("namespace {ns} {}", curly_pad(&exported, "")));
            }
            None => body.extend(alias_defs),
        }
    }
    if !uniform_entries.is_empty() {
        body.push(format!(
            "type Uniforms = {};",
            curly_pad(&uniform_entries, ",")
        ));
    }

    let mut exports = vec![
        format!("{name} as default"),
        format!("{name} as glsl"),
        name.to_string(),
    ];
    if !constants.is_empty() {
        exports.push("inject".to_string());
        exports.push(format!("inject as {name}With"));
    }
    if !uniform_entries.is_empty() {
        exports.push("Uniforms".to_string());
        exports.push(format!("Uniforms as {}Uniforms", capitalize(name)));
    }
    body.push(format!("export {};", curly_inline(&exports)));

    Ok(format!(
        "declare module '{module_id}' {}",
        curly_pad(&body, "")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_without_declarations_exports_only_the_source() {
        let source = "precision highp float;\nfloat lift(vec3 n) { return n.y; }\n";
        assert_eq!(
            module_declaration(source, "@shaders/plain.frag", None, true).unwrap(),
            "declare module '@shaders/plain.frag' {\n\
             \x20   const plain: string;\n\
             \x20   export { plain as default, plain as glsl, plain };\n\
             }"
        );
    }

    #[test]
    fn constants_add_the_inject_clause() {
        let source = "const vec2 offset = vec2(0.0);\n";
        assert_eq!(
            module_declaration(source, "@shaders/wave.frag", None, true).unwrap(),
            "declare module '@shaders/wave.frag' {\n\
             \x20   const wave: string;\n\
             \x20   const inject: (map: { offset?: [number, number] }) => string;\n\
             \x20   export { wave as default, wave as glsl, wave, inject, inject as waveWith };\n\
             }"
        );
    }

    #[test]
    fn uniforms_add_the_uniforms_map_and_exports() {
        let source = "uniform vec2 resolution;\nuniform float time;\n";
        assert_eq!(
            module_declaration(source, "@shaders/demo.frag", None, true).unwrap(),
            "declare module '@shaders/demo.frag' {\n\
             \x20   const demo: string;\n\
             \x20   type Uniforms = {\n\
             \x20       resolution: [number, number] | Float32Array,\n\
             \x20       time: number\n\
             \x20   };\n\
             \x20   export { demo as default, demo as glsl, demo, Uniforms, Uniforms as DemoUniforms };\n\
             }"
        );
    }

    #[test]
    fn library_aliases_render_in_a_namespace_block() {
        let source = "uniform vec2 cursor;\n";
        let declaration =
            module_declaration(source, "@shaders/cursor.frag", Some(&TypeLibrary::three()), true)
                .unwrap();
        assert!(declaration.contains(
            "    namespace THREE {\n\
             \x20       export type Vector2 = { x: number, y: number, isVector2: true };\n\
             \x20   }"
        ));
        assert!(declaration.contains("cursor: [number, number] | Float32Array | THREE.Vector2"));
    }

    #[test]
    fn alias_definitions_are_deduplicated_by_kind() {
        let source = "uniform vec3 light;\nuniform vec3 tint;\nuniform vec3 fog;\n";
        let declaration =
            module_declaration(source, "@shaders/lit.frag", Some(&TypeLibrary::three()), true)
                .unwrap();
        assert_eq!(declaration.matches("export type Vector3 =").count(), 1);
        assert_eq!(declaration.matches("export type Color =").count(), 1);
        assert_eq!(declaration.matches("THREE.Vector3").count(), 3);
    }

    #[test]
    fn disabling_uniform_generation_drops_every_uniform_clause() {
        let source = "const float glow = 1.0;\nuniform vec2 resolution;\n";
        let declaration = module_declaration(
            source,
            "@shaders/glow.frag",
            Some(&TypeLibrary::three()),
            false,
        )
        .unwrap();
        assert!(!declaration.contains("Uniforms"));
        assert!(!declaration.contains("namespace THREE"));
        assert!(declaration.contains("const inject:"));
    }

    #[test]
    fn dynamic_and_fixed_arrays_render_in_the_uniforms_map() {
        let source = "uniform vec2 points[3];\nuniform float weights[COUNT];\n";
        let declaration =
            module_declaration(source, "@shaders/arr.frag", None, true).unwrap();
        assert!(declaration.contains(
            "points: [number, number, number, number, number, number] | Float32Array | \
             [[number, number], [number, number], [number, number]]"
        ));
        assert!(declaration.contains("weights: number[]"));
    }
}
