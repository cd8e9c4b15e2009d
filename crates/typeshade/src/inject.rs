//! The `inject` subcommand: reads a shader and a JSON value map, rewrites
//! the shader's constant declarations, and writes the result out.

use std::collections::HashMap;
use std::fs;

use anyhow::{Context, Result};
use shadertypes::{inject_constants, ConstValue};

use crate::cli::InjectArgs;

pub fn run(args: &InjectArgs) -> Result<()> {
    let source = fs::read_to_string(&args.shader)
        .with_context(|| format!("failed to read shader {}", args.shader.display()))?;
    let raw = fs::read_to_string(&args.values)
        .with_context(|| format!("failed to read value map {}", args.values.display()))?;
    let values: HashMap<String, ConstValue> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse value map {}", args.values.display()))?;

    let rewritten = inject_constants(&source, &values)
        .with_context(|| format!("failed to rewrite {}", args.shader.display()))?;

    match &args.output {
        Some(path) => {
            fs::write(path, rewritten)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(target = %path.display(), constants = values.len(), "injected constants");
        }
        None => print!("{rewritten}"),
    }
    Ok(())
}
