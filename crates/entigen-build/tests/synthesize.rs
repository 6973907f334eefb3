use entigen_build::TypeSynthesizer;
use entigen_schema::{
    config::{TypeConfig, TypeEntry},
    registry::TypeRegistry,
};
use std::fs;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn config(entries: &[(&str, &str)]) -> TypeConfig {
    TypeConfig::new(
        entries
            .iter()
            .map(|(name, base)| TypeEntry::new(*name, *base))
            .collect(),
    )
}

#[test]
fn synthesize_creates_units_and_registers_names() {
    init_logging();
    let dir = tempfile::tempdir().expect("temp dir");
    let synthesizer = TypeSynthesizer::new(dir.path());
    let mut registry = TypeRegistry::new();

    let report = synthesizer
        .synthesize(
            &config(&[("email", "string"), ("amount", "integer")]),
            &mut registry,
        )
        .expect("synthesize");

    assert_eq!(report.created, ["email", "amount"]);
    assert!(report.skipped.is_empty());

    assert!(registry.has("email"));
    assert_eq!(
        registry.get("email").expect("key").as_str(),
        "entigen_types::Email"
    );

    let unit = fs::read_to_string(dir.path().join("email.rs")).expect("unit written");
    assert!(unit.contains("pub struct Email(String);"));
    syn::parse_file(&unit).expect("unit parses");

    assert!(dir.path().join("amount.rs").exists());
}

#[test]
fn synthesize_twice_is_idempotent() {
    init_logging();
    let dir = tempfile::tempdir().expect("temp dir");
    let synthesizer = TypeSynthesizer::new(dir.path());
    let mut registry = TypeRegistry::new();
    let config = config(&[("email", "string"), ("amount", "integer")]);

    synthesizer
        .synthesize(&config, &mut registry)
        .expect("first call");
    let before: Vec<String> = registry.names().map(ToString::to_string).collect();

    let report = synthesizer
        .synthesize(&config, &mut registry)
        .expect("second call");

    assert!(report.created.is_empty());
    assert_eq!(report.skipped, ["email", "amount"]);

    let after: Vec<String> = registry.names().map(ToString::to_string).collect();
    assert_eq!(before, after);
}

#[test]
fn restart_reuses_existing_units() {
    init_logging();
    let dir = tempfile::tempdir().expect("temp dir");
    let synthesizer = TypeSynthesizer::new(dir.path());
    let config = config(&[("email", "string")]);

    let mut registry = TypeRegistry::new();
    synthesizer
        .synthesize(&config, &mut registry)
        .expect("first process");

    // fresh registry, same output directory
    let mut registry = TypeRegistry::new();
    let report = synthesizer
        .synthesize(&config, &mut registry)
        .expect("after restart");

    assert_eq!(report.created, ["email"]);
    assert!(registry.has("email"));
}

#[test]
fn failed_pass_rolls_back_everything_it_did() {
    init_logging();
    let dir = tempfile::tempdir().expect("temp dir");
    let synthesizer = TypeSynthesizer::new(dir.path());
    let mut registry = TypeRegistry::new();

    synthesizer
        .synthesize(&config(&[("email", "string")]), &mut registry)
        .expect("seed call");

    // second entry wraps a base type the catalog does not know
    let err = synthesizer
        .synthesize(
            &config(&[("amount", "integer"), ("price", "decimal")]),
            &mut registry,
        )
        .expect_err("unknown base type");
    assert!(err.to_string().contains("unknown base type 'decimal'"));

    // this call's work is gone
    assert!(!registry.has("amount"));
    assert!(!dir.path().join("amount.rs").exists());

    // prior state is untouched
    assert!(registry.has("email"));
    assert!(dir.path().join("email.rs").exists());

    // fixed configuration succeeds afterwards
    let report = synthesizer
        .synthesize(
            &config(&[("amount", "integer"), ("price", "float")]),
            &mut registry,
        )
        .expect("fixed configuration");
    assert_eq!(report.created, ["amount", "price"]);
}
