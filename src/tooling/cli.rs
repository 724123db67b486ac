//! CLI Tooling
//!
//! Command-line interface over the classifier service: read, add, remove and
//! rename, each with text or JSON output.

use crate::config::{ClassifierConfig, ConfigLoader};
use crate::error::{ClassifierError, ErrorKind};
use crate::service::ClassifierService;
use crate::tree::TreeNode;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// Classifier CLI - hierarchical classification tree
#[derive(Parser)]
#[command(name = "classifier")]
#[command(about = "Hierarchical classification tree over a materialized-path record store")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (layered over the global config file)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Record store directory (overrides storage.path)
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Load layered configuration and fold in command-line overrides.
    pub fn load_config(&self) -> Result<ClassifierConfig, ClassifierError> {
        let mut config = ConfigLoader::load(self.config.as_deref())?;
        if let Some(store) = &self.store {
            config.storage.path = Some(store.clone());
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.logging.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.logging.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
        Ok(config)
    }
}

/// Rendering of command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines; reads print an indented tree
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the tree, or the subtree at PATH
    Read {
        /// Node path, relative to the root
        #[arg(default_value = "/")]
        path: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Add NAME under the existing node at PATH
    Add {
        name: String,
        path: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Remove NAME under PATH together with all of its descendants
    Remove {
        name: String,
        path: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Rename NAME under PATH to NEW_NAME, moving its descendants
    Rename {
        name: String,
        path: String,
        new_name: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the effective configuration as TOML
    Config,
}

impl Commands {
    fn label(&self) -> &'static str {
        match self {
            Commands::Read { .. } => "read",
            Commands::Add { .. } => "add",
            Commands::Remove { .. } => "remove",
            Commands::Rename { .. } => "rename",
            Commands::Config => "config",
        }
    }
}

/// CLI context holding the service and the configuration it was built from.
pub struct CliContext {
    service: ClassifierService,
    config: ClassifierConfig,
}

impl CliContext {
    /// Open the configured store and create a CLI context over it.
    pub fn new(config: ClassifierConfig) -> Result<Self, ClassifierError> {
        let service = ClassifierService::open(&config)?;
        Ok(Self { service, config })
    }

    /// Create a context over an already constructed service.
    pub fn with_service(service: ClassifierService, config: ClassifierConfig) -> Self {
        Self { service, config }
    }

    /// Flush the store and release it.
    pub fn close(self) -> Result<(), ClassifierError> {
        self.service.close()
    }

    /// Execute a CLI command
    pub fn execute(&self, command: &Commands) -> Result<String, ClassifierError> {
        let started = Instant::now();
        let result = self.dispatch(command);
        info!(
            command = command.label(),
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn dispatch(&self, command: &Commands) -> Result<String, ClassifierError> {
        match command {
            Commands::Read { path, format } => {
                let tree = self.service.read(path)?;
                Ok(if *format == OutputFormat::Json {
                    to_json(&tree)
                } else {
                    format_tree_text(&tree)
                })
            }
            Commands::Add { name, path, format } => {
                let created = self.service.add(name, path)?;
                Ok(if *format == OutputFormat::Json {
                    to_json(&created)
                } else {
                    format!(
                        "Added {} under {} (id {})",
                        created.name, created.path, created.id
                    )
                })
            }
            Commands::Remove { name, path, format } => {
                self.service.remove(name, path)?;
                Ok(if *format == OutputFormat::Json {
                    to_json(&json!({ "removed": true, "name": name, "path": path }))
                } else {
                    format!("Removed {} from {}", name, path)
                })
            }
            Commands::Rename {
                name,
                path,
                new_name,
                format,
            } => {
                self.service.rename(name, path, new_name)?;
                Ok(if *format == OutputFormat::Json {
                    to_json(&json!({
                        "renamed": true,
                        "name": name,
                        "new_name": new_name,
                        "path": path,
                    }))
                } else {
                    format!("Renamed {} to {} under {}", name, new_name, path)
                })
            }
            Commands::Config => toml::to_string_pretty(&self.config).map_err(|e| {
                ClassifierError::ConfigError(format!("Failed to serialize configuration: {}", e))
            }),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Render a tree as indented names, two spaces per level.
pub fn format_tree_text(tree: &TreeNode) -> String {
    let mut lines = Vec::with_capacity(tree.node_count());
    let mut stack = vec![(tree, 0usize)];
    while let Some((node, depth)) = stack.pop() {
        lines.push(format!("{}{}", "  ".repeat(depth), node.name));
        for child in node.children.iter().rev() {
            stack.push((child, depth + 1));
        }
    }
    lines.join("\n")
}

/// Process exit code for a failed command.
pub fn exit_code(err: &ClassifierError) -> i32 {
    match err.kind() {
        ErrorKind::Config => 1,
        ErrorKind::InvalidName => 2,
        ErrorKind::NotFound => 3,
        ErrorKind::Conflict => 4,
        ErrorKind::StorageUnavailable => 5,
    }
}
