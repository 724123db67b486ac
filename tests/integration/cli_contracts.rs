use std::sync::Arc;

use classifier::config::ClassifierConfig;
use classifier::tooling::cli::{exit_code, CliContext, Commands, OutputFormat};
use classifier::{ClassifierService, MemoryRecordStore, ServiceOptions};
use tempfile::TempDir;

fn context(temp_dir: &TempDir) -> CliContext {
    let mut config = ClassifierConfig::default();
    config.storage.path = Some(temp_dir.path().join("store"));
    CliContext::new(config).unwrap()
}

fn add(name: &str, path: &str) -> Commands {
    Commands::Add {
        name: name.to_string(),
        path: path.to_string(),
        format: OutputFormat::Json,
    }
}

fn read(path: &str, format: OutputFormat) -> Commands {
    Commands::Read {
        path: path.to_string(),
        format,
    }
}

#[test]
fn add_json_contract_has_required_fields() {
    let temp_dir = TempDir::new().unwrap();
    let cli = context(&temp_dir);

    let output = cli.execute(&add("Docs", "/")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert!(parsed.get("id").and_then(|v| v.as_str()).is_some());
    assert_eq!(parsed.get("name").and_then(|v| v.as_str()), Some("Docs"));
    assert_eq!(parsed.get("path").and_then(|v| v.as_str()), Some("/"));
}

#[test]
fn read_json_contract_is_nested() {
    let temp_dir = TempDir::new().unwrap();
    let cli = context(&temp_dir);
    cli.execute(&add("Docs", "/")).unwrap();
    cli.execute(&add("Sub", "/Docs")).unwrap();

    let output = cli.execute(&read("/", OutputFormat::Json)).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["name"], "root");
    assert_eq!(parsed["path"], "/");
    let docs = &parsed["children"][0];
    assert_eq!(docs["name"], "Docs");
    assert_eq!(docs["children"][0]["name"], "Sub");
    assert_eq!(docs["children"][0]["path"], "/root/Docs/");
    assert!(docs["children"][0]["children"]
        .as_array()
        .unwrap()
        .is_empty());
}

#[test]
fn read_text_renders_indented_tree() {
    let temp_dir = TempDir::new().unwrap();
    let cli = context(&temp_dir);
    cli.execute(&add("Docs", "/")).unwrap();
    cli.execute(&add("Sub", "/Docs")).unwrap();

    let output = cli.execute(&read("/Docs", OutputFormat::Text)).unwrap();
    assert_eq!(output, "Docs\n  Sub");
}

#[test]
fn rename_and_remove_contracts() {
    let temp_dir = TempDir::new().unwrap();
    let cli = context(&temp_dir);
    cli.execute(&add("Docs", "/")).unwrap();

    let output = cli
        .execute(&Commands::Rename {
            name: "Docs".to_string(),
            path: "/".to_string(),
            new_name: "Papers".to_string(),
            format: OutputFormat::Json,
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["renamed"], true);
    assert_eq!(parsed["new_name"], "Papers");

    let output = cli
        .execute(&Commands::Remove {
            name: "Papers".to_string(),
            path: "/".to_string(),
            format: OutputFormat::Json,
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["removed"], true);

    assert_eq!(cli.execute(&read("/", OutputFormat::Text)).unwrap(), "root");
}

#[test]
fn failures_map_to_exit_codes() {
    let temp_dir = TempDir::new().unwrap();
    let cli = context(&temp_dir);

    let invalid = cli.execute(&add("Bad!", "/")).unwrap_err();
    assert_eq!(exit_code(&invalid), 2);

    let missing = cli.execute(&read("/Nope", OutputFormat::Text)).unwrap_err();
    assert_eq!(exit_code(&missing), 3);

    let conflict = cli.execute(&add("A", "/Missing")).unwrap_err();
    assert_eq!(exit_code(&conflict), 4);
}

#[test]
fn config_command_prints_toml() {
    let temp_dir = TempDir::new().unwrap();
    let cli = context(&temp_dir);

    let output = cli.execute(&Commands::Config).unwrap();
    let parsed: toml::Value = toml::from_str(&output).unwrap();
    assert_eq!(parsed["service"]["rename_strategy"].as_str(), Some("segment"));
    assert!(parsed["storage"]["path"].as_str().unwrap().ends_with("store"));
}

#[test]
fn context_over_memory_store_serves_commands() {
    let service =
        ClassifierService::new(Arc::new(MemoryRecordStore::new()), ServiceOptions::default())
            .unwrap();
    let cli = CliContext::with_service(service, ClassifierConfig::default());

    cli.execute(&add("Docs", "/")).unwrap();
    cli.execute(&add("Sub", "/Docs")).unwrap();
    assert_eq!(
        cli.execute(&read("/", OutputFormat::Text)).unwrap(),
        "root\n  Docs\n    Sub"
    );

    let conflict = cli.execute(&add("X", "/Docs//")).unwrap_err();
    assert_eq!(exit_code(&conflict), 4);
    cli.close().unwrap();
}
