//! Command-line interface.

use crate::config::SchematsConfig;
use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use schemats_typegen::{InputFormat, TypegenOptions, generate_typescript_types, parse_str};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Generate TypeScript declarations from OpenAPI component schemas
#[derive(Parser, Debug)]
#[command(name = "schemats", version)]
pub struct Cli {
    /// OpenAPI document (JSON or YAML), use - for stdin
    pub input: PathBuf,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Input format
    #[arg(short, long, value_enum, default_value = "auto")]
    pub format: Format,

    /// Config file (defaults to ./schemats.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Prefix for every declared type name
    #[arg(long)]
    pub prefix: Option<String>,

    /// Expand $refs into inline types instead of naming them
    #[arg(long)]
    pub inline_ref: bool,

    /// Omit the 'export' keyword
    #[arg(long)]
    pub no_export: bool,

    /// Keep the mapped type for schemas that would otherwise alias 'any'
    #[arg(long)]
    pub typed_aliases: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Format {
    /// Detect from content
    Auto,
    Json,
    Yaml,
}

impl From<Format> for InputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Auto => InputFormat::Auto,
            Format::Json => InputFormat::Json,
            Format::Yaml => InputFormat::Yaml,
        }
    }
}

impl Cli {
    /// Apply command-line overrides on top of configured options.
    pub fn options(&self, mut options: TypegenOptions) -> TypegenOptions {
        if let Some(prefix) = &self.prefix {
            options.naming_prefix = prefix.clone();
        }
        if self.inline_ref {
            options.inline_ref = true;
        }
        if self.no_export {
            options.export = false;
        }
        if self.typed_aliases {
            options.typed_aliases = true;
        }
        options
    }

    pub fn run(&self) -> Result<()> {
        let config = SchematsConfig::load(self.config.as_deref(), Path::new("."))?;
        let options = self.options(config.typegen);

        let content = read_input(&self.input)?;
        let schemas = parse_str(&content, self.format.into())
            .with_context(|| format!("Failed to parse {}", self.input.display()))?;
        tracing::info!(schemas = schemas.len(), "generating declarations");

        let mut code = generate_typescript_types(&schemas, &options);
        if !code.is_empty() {
            code.push('\n');
        }

        if let Some(path) = &self.output {
            std::fs::write(path, &code)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Generated {}", path.display());
        } else {
            print!("{}", code);
        }
        Ok(())
    }
}

/// Read the input file, or stdin for `-`.
fn read_input(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(input).with_context(|| format!("Failed to read {}", input.display()))
}
