//! CLI argument definitions for the bracketform binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// How the input JSON is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputKind {
    /// Plain nested data: object keys become field names
    Data,
    /// Tagged form AST: nodes carry `type`, `name`, `value` and `children`
    Ast,
}

/// What the serialize command prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SerializeFormat {
    /// Aligned NAME / VALUE table
    Pairs,
    /// JSON array of `{ "name", "value" }` objects
    Json,
    /// Hidden `<input>` elements
    Html,
    /// `application/x-www-form-urlencoded` body
    Urlencoded,
}

/// Flatten nested form trees into bracket-named form fields
#[derive(Parser, Debug)]
#[command(name = "bracketform")]
#[command(about = "Serialize form trees into bracket-named form fields")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serialize a JSON form tree
    Serialize(SerializeArgs),
    /// List registered field types and their behaviors
    FieldTypes(FieldTypesArgs),
}

/// Arguments for the serialize command
#[derive(clap::Args, Debug)]
pub struct SerializeArgs {
    /// JSON input file; reads stdin when omitted or `-`
    pub file: Option<PathBuf>,

    /// How to interpret the input
    #[arg(short, long, value_enum, default_value = "ast", env = "BRACKETFORM_INPUT")]
    pub input: InputKind,

    /// Output format
    #[arg(short, long, value_enum, default_value = "pairs", env = "BRACKETFORM_FORMAT")]
    pub format: SerializeFormat,

    #[command(flatten)]
    pub options: OptionArgs,
}

/// Serialization options, layered over an optional config file
#[derive(clap::Args, Debug, Default)]
pub struct OptionArgs {
    /// JSON file with serialization options
    #[arg(short, long, env = "BRACKETFORM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Namespace every field name under this segment
    #[arg(short, long, env = "BRACKETFORM_PREFIX")]
    pub prefix: Option<String>,

    /// Write repetition indices as `[]` instead of positions
    #[arg(long)]
    pub implicit_index: bool,

    /// Emit a marker field ahead of each map inside a list
    #[arg(long)]
    pub list_map_marker: bool,

    /// Extra leaf field type (repeatable)
    #[arg(
        short = 't',
        long = "field-type",
        env = "BRACKETFORM_FIELD_TYPES",
        value_delimiter = ','
    )]
    pub field_types: Vec<String>,

    /// Maximum nesting depth
    #[arg(long, env = "BRACKETFORM_MAX_DEPTH")]
    pub max_depth: Option<usize>,
}

/// Arguments for the field-types command
#[derive(clap::Args, Debug)]
pub struct FieldTypesArgs {
    /// Extra leaf field type to include (repeatable)
    #[arg(
        short = 't',
        long = "field-type",
        env = "BRACKETFORM_FIELD_TYPES",
        value_delimiter = ','
    )]
    pub field_types: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "human")]
    pub output: OutputFormat,
}
