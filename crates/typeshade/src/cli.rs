use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "typeshade",
    author,
    version,
    about = "Ambient TypeScript declarations for GLSL shader modules"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan a shader directory and write a `.d.ts` declaration beside every shader.
    Generate(GenerateArgs),
    /// Rewrite a shader's constants from a JSON value map.
    Inject(InjectArgs),
}

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Root directory to scan recursively for shader sources.
    #[arg(long, value_name = "DIR")]
    pub dir: PathBuf,

    /// Import alias prefixing every module id (e.g. `@shaders`).
    #[arg(long, value_name = "PREFIX")]
    pub alias: String,

    /// Type library: a TOML file, or `three` for the built-in THREE.js table.
    #[arg(long, value_name = "FILE|three")]
    pub library: Option<String>,

    /// Declare only constants and the module source, skipping uniform types.
    #[arg(long)]
    pub no_uniforms: bool,

    /// Shader file extensions to consider.
    #[arg(long, value_name = "EXT", value_delimiter = ',', default_values_t = default_extensions())]
    pub ext: Vec<String>,

    /// Remove `.d.ts` files whose shader no longer exists.
    #[arg(long)]
    pub clean: bool,
}

fn default_extensions() -> Vec<String> {
    vec!["frag".to_string(), "vert".to_string(), "glsl".to_string()]
}

#[derive(Parser, Debug)]
pub struct InjectArgs {
    /// Shader file to rewrite.
    #[arg(long, value_name = "FILE")]
    pub shader: PathBuf,

    /// JSON file mapping constant names to replacement values.
    #[arg(long, value_name = "FILE")]
    pub values: PathBuf,

    /// Output path; prints to stdout when omitted.
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn parse() -> Cli {
    Cli::parse()
}
