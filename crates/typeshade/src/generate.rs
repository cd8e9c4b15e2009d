//! Declaration generation over a shader directory: walks the tree, derives a
//! module id for every shader, and writes one ambient `.d.ts` file beside
//! each source. The translation itself lives in `shadertypes`; this module
//! is deliberately only filesystem glue.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use shadertypes::{module_declaration, TypeLibrary};

use crate::cli::GenerateArgs;

pub fn run(args: &GenerateArgs) -> Result<()> {
    let library = load_library(args.library.as_deref())?;
    let shaders = list_shaders(&args.dir, &args.ext)?;

    for path in &shaders {
        let module_id = module_id(&args.dir, &args.alias, path)?;
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read shader {}", path.display()))?;
        let declaration =
            module_declaration(&source, &module_id, library.as_ref(), !args.no_uniforms)
                .with_context(|| format!("failed to translate {}", path.display()))?;
        let target = declaration_path(path);
        fs::write(&target, declaration)
            .with_context(|| format!("failed to write {}", target.display()))?;
        tracing::info!(module = %module_id, target = %target.display(), "wrote declaration");
    }

    if args.clean {
        let removed = clean_stale(&args.dir, &args.ext)?;
        if removed > 0 {
            tracing::info!(removed, "removed stale declarations");
        }
    }

    tracing::debug!(count = shaders.len(), "declaration generation complete");
    Ok(())
}

fn load_library(selector: Option<&str>) -> Result<Option<TypeLibrary>> {
    match selector {
        None => Ok(None),
        Some("three") => Ok(Some(TypeLibrary::three())),
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read type library {path}"))?;
            let library = toml::from_str(&raw)
                .with_context(|| format!("failed to parse type library {path}"))?;
            Ok(Some(library))
        }
    }
}

fn list_shaders(root: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    walk(root, &mut files)?;
    files.retain(|path| matches_extension(path, extensions) && !is_declaration(path));
    files.sort();
    Ok(files)
}

fn walk(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to read directory {}", dir.display()))?;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            walk(&path, out)?;
        } else {
            out.push(path);
        }
    }
    Ok(())
}

fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|candidate| candidate == ext))
}

fn is_declaration(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(".d.ts"))
}

/// `@shaders` + `effects/blur.frag` becomes `@shaders/effects/blur.frag`,
/// with forward slashes regardless of platform.
fn module_id(root: &Path, alias: &str, path: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(root)
        .with_context(|| format!("shader {} escapes the scan root", path.display()))?;
    let segments: Vec<String> = relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect();
    Ok(format!("{}/{}", alias, segments.join("/")))
}

fn declaration_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".d.ts");
    path.with_file_name(name)
}

/// Removes declarations whose shader source is gone, mirroring what the
/// generation pass would have produced for the current tree.
fn clean_stale(root: &Path, extensions: &[String]) -> Result<usize> {
    let mut files = Vec::new();
    walk(root, &mut files)?;

    let mut removed = 0;
    for path in files.iter().filter(|path| is_declaration(path)) {
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        let Some(stem) = name.strip_suffix(".d.ts") else {
            continue;
        };
        let shader = path.with_file_name(stem);
        if matches_extension(&shader, extensions) && !shader.exists() {
            fs::remove_file(path)
                .with_context(|| format!("failed to remove {}", path.display()))?;
            tracing::info!(target = %path.display(), "removed stale declaration");
            removed += 1;
        }
    }
    Ok(removed)
}
