//! Serialize command - reads a JSON form tree and prints its form fields.

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use bracketform::{FieldPair, FormSerializer, Indexing, Node, SerializeOptions, render};

use crate::cli::{InputKind, OptionArgs, SerializeArgs, SerializeFormat};
use crate::output::format_table;

/// Run the serialize command
pub fn run(args: &SerializeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let options = resolve_options(&args.options)?;
    let source = read_input(args.file.as_deref())?;
    let node = decode(&source, args.input)?;

    let pairs = FormSerializer::new().with_options(options).serialize(&node)?;
    tracing::info!(fields = pairs.len(), "Serialized form");

    let rendered = render_pairs(&pairs, args.format)?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}

/// Loads the config file, if any, and layers the command-line flags over it.
pub fn resolve_options(args: &OptionArgs) -> bracketform::Result<SerializeOptions> {
    let mut options = match &args.config {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading serialization config");
            serde_json::from_str(&fs::read_to_string(path)?)?
        }
        None => SerializeOptions::default(),
    };

    if let Some(prefix) = &args.prefix {
        options.prefix = Some(prefix.clone());
    }
    if args.implicit_index {
        options.indexing = Indexing::Implicit;
    }
    if args.list_map_marker {
        options.list_map_marker = true;
    }
    options
        .additional_field_types
        .extend(args.field_types.iter().cloned());
    if let Some(max_depth) = args.max_depth {
        options.max_depth = max_depth;
    }

    Ok(options)
}

/// Reads the input file, or stdin when `file` is `None` or `-`.
pub fn read_input(file: Option<&Path>) -> io::Result<String> {
    match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path),
        _ => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

/// Parses `source` as JSON and decodes it as `kind`.
pub fn decode(source: &str, kind: InputKind) -> bracketform::Result<Node> {
    let value: serde_json::Value = serde_json::from_str(source)?;
    match kind {
        InputKind::Data => Ok(Node::from_data(value)),
        InputKind::Ast => Ok(Node::from_ast(value)?),
    }
}

/// Renders serialized pairs in the requested format.
pub fn render_pairs(
    pairs: &[FieldPair],
    format: SerializeFormat,
) -> Result<String, serde_json::Error> {
    Ok(match format {
        SerializeFormat::Pairs => {
            let rows: Vec<Vec<String>> = pairs
                .iter()
                .map(|pair| vec![pair.name.clone(), pair.value.to_string()])
                .collect();
            format_table(&["NAME", "VALUE"], &rows)
        }
        SerializeFormat::Json => serde_json::to_string_pretty(pairs)?,
        SerializeFormat::Html => render::hidden_inputs(pairs),
        SerializeFormat::Urlencoded => render::form_urlencoded(pairs),
    })
}
