//! Field types command - lists the tags the serializer recognizes.

use bracketform::FieldTypeRegistry;

use crate::cli::FieldTypesArgs;
use crate::output::{OutputFormat, print_table};

/// Run the field-types command
pub fn run(args: &FieldTypesArgs) -> Result<(), Box<dyn std::error::Error>> {
    let registry = registry_with(&args.field_types);

    match args.output {
        OutputFormat::Human => print_table(&["TAG", "BEHAVIOR"], &rows(&registry)),
        OutputFormat::Json => {
            let entries: Vec<_> = registry
                .entries()
                .into_iter()
                .map(|(tag, behavior)| serde_json::json!({ "tag": tag, "behavior": behavior }))
                .collect();
            println!("{}", serde_json::to_string(&entries)?);
        }
    }

    Ok(())
}

/// The built-in registry plus `extra` leaf tags.
fn registry_with(extra: &[String]) -> FieldTypeRegistry {
    FieldTypeRegistry::with_builtins()
        .with_additional_leaves(extra)
        .into_owned()
}

fn rows(registry: &FieldTypeRegistry) -> Vec<Vec<String>> {
    registry
        .entries()
        .into_iter()
        .map(|(tag, behavior)| vec![tag.to_string(), behavior.to_string()])
        .collect()
}
