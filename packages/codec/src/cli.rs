//! Command-line interface for checking deployment descriptors.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use serde::Serialize;

use crate::config::DecodeOptions;
use crate::diagnostics::{Diagnostic, Diagnostics, Policy};
use crate::enums::{EnumMapping, EnumRegistry};
use crate::error::{CodecError, Result};
use crate::qname::QName;
use crate::record::Record;
use crate::registry::{create_binding_engine, BindingEngine};

/// Descriptor Check - Validate and round-trip Java EE deployment descriptors.
#[derive(Parser)]
#[command(name = "descriptor-check")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format of the `check` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// YAML report with diagnostics and the decoded record
    Yaml,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a descriptor and report its diagnostics.
    Check {
        /// Path to ejb-jar.xml, web.xml or persistence.xml
        file: PathBuf,

        /// Abort on the first diagnostic
        #[arg(long)]
        strict: bool,

        /// Read J2EE, JCP and Jakarta namespaces as Java EE
        #[arg(long)]
        legacy_namespaces: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Decode a descriptor and write it back to stdout.
    Roundtrip {
        /// Path to the descriptor
        file: PathBuf,

        /// Read J2EE, JCP and Jakarta namespaces as Java EE
        #[arg(long)]
        legacy_namespaces: bool,
    },

    /// List enum schema types, or the tokens of one of them.
    Tokens {
        /// Local name (e.g. trans-attributeType) or {namespace}name
        schema_type: Option<String>,
    },

    /// List the document elements that can be decoded.
    Roots,
}

/// YAML report of the `check` command.
#[derive(Serialize)]
struct CheckReport<'a> {
    file: String,
    root: &'a QName,
    diagnostics: &'a [Diagnostic],
    record: Option<&'a Record>,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            file,
            strict,
            legacy_namespaces,
            format,
        } => check_command(&file, strict, legacy_namespaces, format),
        Commands::Roundtrip {
            file,
            legacy_namespaces,
        } => roundtrip_command(&file, legacy_namespaces),
        Commands::Tokens { schema_type } => tokens_command(schema_type.as_deref()),
        Commands::Roots => roots_command(),
    }
}

fn engine_with(legacy_namespaces: bool) -> BindingEngine {
    create_binding_engine()
        .with_options(DecodeOptions::new().with_legacy_namespaces(legacy_namespaces))
}

/// Find an enum mapping by local name or by `{namespace}local` notation.
///
/// # Errors
/// Returns `UnknownSchemaType` if no registered schema type matches.
pub fn find_enum_mapping<'r>(enums: &'r EnumRegistry, name: &str) -> Result<&'r EnumMapping> {
    let found = enums
        .schema_types()
        .into_iter()
        .find(|schema_type| schema_type.local_name() == name || schema_type.to_string() == name);

    match found {
        Some(schema_type) => enums.lookup(schema_type),
        None => Err(CodecError::UnknownSchemaType(QName::new("", name.to_string()))),
    }
}

/// Execute the check command.
fn check_command(
    file: &Path,
    strict: bool,
    legacy_namespaces: bool,
    format: OutputFormat,
) -> Result<()> {
    let engine = engine_with(legacy_namespaces);
    let policy = if strict {
        Policy::Strict
    } else {
        Policy::Lenient
    };
    let mut diagnostics = Diagnostics::new(policy);

    let descriptor = engine.decode_file(file, &mut diagnostics)?;

    match format {
        OutputFormat::Yaml => {
            let report = CheckReport {
                file: file.display().to_string(),
                root: &descriptor.root,
                diagnostics: diagnostics.as_slice(),
                record: descriptor.record.as_ref(),
            };
            print!("{}", serde_yaml_ng::to_string(&report)?);
        }
        OutputFormat::Text => {
            println!(
                "{} {}",
                style("Checking").bold(),
                style(file.display()).cyan()
            );
            println!("  Root: {}", style(&descriptor.root).green());
            if let Some(codec) = engine.roots().resolve(&descriptor.root) {
                println!("  Type: {}", codec.schema_type());
            }
            if descriptor.record.is_none() {
                println!("  Body: {}", style("nil").yellow());
            }

            if diagnostics.is_empty() {
                println!();
                println!("{}", style("No diagnostics").green().bold());
            } else {
                println!(
                    "  Diagnostics: {}",
                    style(diagnostics.len()).yellow().bold()
                );
                println!();
                for diagnostic in diagnostics.iter() {
                    println!(
                        "  {} [{:?}] {}",
                        style("-").yellow(),
                        diagnostic.category(),
                        diagnostic
                    );
                }
            }
        }
    }

    if diagnostics.is_empty() {
        Ok(())
    } else {
        Err(CodecError::Invalid(diagnostics.len()))
    }
}

/// Execute the roundtrip command.
fn roundtrip_command(file: &Path, legacy_namespaces: bool) -> Result<()> {
    let engine = engine_with(legacy_namespaces);
    let mut diagnostics = Diagnostics::lenient();

    let descriptor = engine.decode_file(file, &mut diagnostics)?;
    let xml = engine.encode_document(&descriptor, &mut diagnostics)?;

    for diagnostic in diagnostics.iter() {
        eprintln!("{} {}", style("warning:").yellow().bold(), diagnostic);
    }
    println!("{xml}");

    Ok(())
}

/// Execute the tokens command.
fn tokens_command(schema_type: Option<&str>) -> Result<()> {
    let engine = create_binding_engine();
    let enums = engine.enums();

    match schema_type {
        Some(name) => {
            let mapping = find_enum_mapping(enums, name)?;
            println!("{}", style(mapping.schema_type()).bold());
            for token in mapping.tokens() {
                println!("  {token}");
            }
        }
        None => {
            for schema_type in enums.schema_types() {
                println!("{schema_type}");
            }
        }
    }

    Ok(())
}

/// Execute the roots command.
fn roots_command() -> Result<()> {
    let engine = create_binding_engine();
    let roots = engine.roots();

    for root in roots.registered_roots() {
        match roots.resolve(root) {
            Some(codec) => println!("{} -> {}", style(root).cyan(), codec.schema_type()),
            None => println!("{}", style(root).cyan()),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JAVAEE_NAMESPACE;
    use crate::registry::create_enum_registry;

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::parse_from(["descriptor-check", "check", "ejb-jar.xml"]);

        let Commands::Check {
            file,
            strict,
            legacy_namespaces,
            format,
        } = cli.command
        else {
            panic!("expected check command");
        };
        assert_eq!(file, PathBuf::from("ejb-jar.xml"));
        assert!(!strict);
        assert!(!legacy_namespaces);
        assert_eq!(format, OutputFormat::Text);
    }

    #[test]
    fn test_cli_parse_check_with_flags() {
        let cli = Cli::parse_from([
            "descriptor-check",
            "check",
            "web.xml",
            "--strict",
            "--legacy-namespaces",
            "--format",
            "yaml",
        ]);

        let Commands::Check {
            strict,
            legacy_namespaces,
            format,
            ..
        } = cli.command
        else {
            panic!("expected check command");
        };
        assert!(strict);
        assert!(legacy_namespaces);
        assert_eq!(format, OutputFormat::Yaml);
    }

    #[test]
    fn test_cli_parse_roundtrip() {
        let cli = Cli::parse_from(["descriptor-check", "roundtrip", "persistence.xml"]);

        let Commands::Roundtrip {
            file,
            legacy_namespaces,
        } = cli.command
        else {
            panic!("expected roundtrip command");
        };
        assert_eq!(file, PathBuf::from("persistence.xml"));
        assert!(!legacy_namespaces);
    }

    #[test]
    fn test_cli_parse_tokens() {
        let cli = Cli::parse_from(["descriptor-check", "tokens", "trans-attributeType"]);
        let Commands::Tokens { schema_type } = cli.command else {
            panic!("expected tokens command");
        };
        assert_eq!(schema_type.as_deref(), Some("trans-attributeType"));

        let cli = Cli::parse_from(["descriptor-check", "tokens"]);
        assert!(matches!(cli.command, Commands::Tokens { schema_type: None }));
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let result = Cli::try_parse_from(["descriptor-check", "check", "a.xml", "--format", "json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_find_enum_mapping_by_local_name() {
        let enums = create_enum_registry();
        let mapping = find_enum_mapping(&enums, "session-typeType").unwrap();
        assert_eq!(mapping.tokens(), ["Stateful", "Stateless", "Singleton"]);
    }

    #[test]
    fn test_find_enum_mapping_by_clark_name() {
        let enums = create_enum_registry();
        let name = format!("{{{JAVAEE_NAMESPACE}}}res-authType");
        let mapping = find_enum_mapping(&enums, &name).unwrap();
        assert_eq!(mapping.tokens(), ["Application", "Container"]);
    }

    #[test]
    fn test_find_enum_mapping_unknown() {
        let enums = create_enum_registry();
        assert!(matches!(
            find_enum_mapping(&enums, "colorType"),
            Err(CodecError::UnknownSchemaType(_))
        ));
    }
}
