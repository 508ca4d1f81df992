//! Integration tests for hl7c-schema: load fixtures, sanitize, emit Go.
//!
//! Run `cargo insta review` to update snapshots after intentional changes.

use hl7c_schema::{ConfigError, DEFAULT_IMPORTS, Field, generate_go, input};

fn load_fixture(name: &str) -> Vec<u8> {
    let path = format!("tests/fixtures/{}.yaml", name);
    std::fs::read(&path).unwrap_or_else(|_| panic!("fixture {} not found", name))
}

fn load_err(yaml: &str) -> ConfigError {
    input::load(yaml.as_bytes(), None).expect_err("config should be rejected")
}

// === Loading ===

#[test]
fn patient_config_is_normalized() {
    let config = input::load(&load_fixture("patient"), None).unwrap();

    assert_eq!(config.meta.package, "objects");
    assert_eq!(
        config.meta.imports,
        vec!["encoding/json", "github.com/google/uuid", "time"]
    );

    let patient = &config.models[0];
    assert_eq!(patient.name, "Patient");
    assert_eq!(
        patient.fields,
        vec![
            Field::new("Mrn", "CX", "PID.3"),
            Field::new("Name", "string", "PID.5"),
            Field::new("Dob", "timestamp", "PID.7"),
        ]
    );

    let cx = &config.types[0];
    assert_eq!(cx.name, "CX");
    let tags: Vec<_> = cx.fields.iter().map(|f| f.tag.as_str()).collect();
    assert_eq!(tags, vec!["1", "2", "3", "4", "5", "6"]);
    assert_eq!(cx.fields[1].name, "CheckDigit");
    assert!(!cx.needs_custom_deserialize());
}

#[test]
fn declared_imports_come_first() {
    let config = input::load(&load_fixture("visit"), None).unwrap();
    assert_eq!(
        config.meta.imports,
        vec!["time", "encoding/json", "github.com/google/uuid"]
    );
    assert!(config.types[0].needs_custom_deserialize());
}

#[test]
fn default_imports_present_for_any_valid_input() {
    let yaml = "meta:\n  package: p\nmodels:\n  - name: m\n    fields:\n      - name: f\n";
    let config = input::load(yaml.as_bytes(), None).unwrap();
    for import in DEFAULT_IMPORTS {
        assert!(config.meta.imports.iter().any(|i| i == import));
    }
    assert!(!config.meta.imports.iter().any(|i| i == "time"));
}

#[test]
fn rejects_malformed_configs() {
    assert!(matches!(load_err("invalid"), ConfigError::Decode(_)));

    assert!(matches!(
        load_err("meta:\n  package: objects\n  imports:\n    - time\n"),
        ConfigError::NoModels
    ));

    assert!(matches!(
        load_err(
            "meta:\n  package: objects\nmodels:\n  - name: patient\n    fields:\n      - name: mrn\ntypes:\n  - name: CX\n"
        ),
        ConfigError::EmptyTypeFields(_)
    ));

    assert!(matches!(
        load_err(
            "meta:\n  package: objects\nmodels:\n  - name: patient\n    fields:\n      - name: mrn\ntypes:\n  - fields:\n      - name: id\n      - name: checkDigit\n"
        ),
        ConfigError::MissingTypeName
    ));

    assert!(matches!(
        load_err("meta:\n  package: objects\nmodels:\n  - name: patient\n"),
        ConfigError::EmptyModelFields(_)
    ));

    assert!(matches!(
        load_err(
            "meta:\n  package: objects\nmodels:\n  - name: patient\n    fields:\n      - type: string\n        tag: PID.5\n"
        ),
        ConfigError::MissingFieldName(_)
    ));

    assert!(matches!(
        load_err(
            "meta:\n  package: objects\nmodels:\n  - name: patient\n    fields:\n      - name: mrn\n        type: CX\n        tag: PID.3\n"
        ),
        ConfigError::UndefinedType(_)
    ));
}

#[test]
fn error_messages() {
    let err = load_err(
        "meta:\n  package: objects\nmodels:\n  - name: patient\n    fields:\n      - name: mrn\n        type: CX\n",
    );
    assert_eq!(err.to_string(), "type not defined: CX");
    assert_eq!(
        load_err("meta:\n  package: objects\n").to_string(),
        "no models defined"
    );
}

// === Emission ===

#[test]
fn patient_model() {
    let config = input::load(&load_fixture("patient"), None).unwrap();
    let output = generate_go(&config);

    insta::assert_snapshot!(output);
}

#[test]
fn visit_with_date_and_timestamp() {
    let config = input::load(&load_fixture("visit"), None).unwrap();
    let output = generate_go(&config);

    assert!(output.contains("t.OpenedOn, _ = time.Parse(\"20060102\", aux.OpenedOn)"));
    assert!(output.contains("t.ClosedAt, _ = time.Parse(\"20060102150405\", aux.ClosedAt)"));
    insta::assert_snapshot!(output);
}

#[test]
fn plain_custom_type_has_no_unmarshal() {
    let config = input::load(&load_fixture("patient"), None).unwrap();
    let output = generate_go(&config);
    assert!(!output.contains("func (t *CX)"));
    assert!(output.contains("func (m *Patient) UnmarshalJSON(b []byte) error {"));
}

#[test]
fn emission_is_deterministic() {
    let config = input::load(&load_fixture("visit"), None).unwrap();
    assert_eq!(generate_go(&config), generate_go(&config));
}
