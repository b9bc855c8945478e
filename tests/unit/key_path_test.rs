// Property-based tests for key-path normalization.
//
// The normalizer must be idempotent for every input class: filesystem
// paths, file:// references, inline PEM literals and plain garbage.

use std::io::Write;

use paybase::gateways::{load_key_material, normalize_key_path};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_normalize_is_idempotent(input in "\\PC{0,64}") {
        let once = normalize_key_path(&input);
        let twice = normalize_key_path(&once);

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_normalize_is_idempotent_for_pem_literals(body in "[A-Za-z0-9+/=]{0,64}") {
        let input = format!("-----BEGIN PUBLIC KEY-----\n{body}\n-----END PUBLIC KEY-----");
        let once = normalize_key_path(&input);

        prop_assert_eq!(&once, &input);
        prop_assert_eq!(normalize_key_path(&once), once);
    }

    #[test]
    fn test_normalize_is_idempotent_for_file_uris(path in "[a-z/]{0,32}") {
        let input = format!("file:///{path}");
        let once = normalize_key_path(&input);

        prop_assert_eq!(&once, &input);
        prop_assert_eq!(normalize_key_path(&once), once);
    }
}

#[test]
fn test_empty_input_stays_empty() {
    assert_eq!(normalize_key_path(""), "");
    assert_eq!(normalize_key_path("  \t"), "");
}

#[test]
fn test_existing_file_gains_file_scheme_exactly_once() {
    let file = tempfile::NamedTempFile::new().expect("temp file");
    let path = file.path().display().to_string();

    let once = normalize_key_path(&path);
    assert_eq!(once, format!("file://{path}"));

    // Already qualified, second pass is a no-op.
    assert_eq!(normalize_key_path(&once), once);
}

#[test]
fn test_missing_path_passes_through_trimmed() {
    assert_eq!(
        normalize_key_path("  /no/such/key.pem  "),
        "/no/such/key.pem"
    );
}

#[test]
fn test_load_key_material_reads_file_targets() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "-----BEGIN PUBLIC KEY-----\nabc\n-----END PUBLIC KEY-----").expect("write pem");

    let path = file.path().display().to_string();
    let loaded = load_key_material(&path).expect("readable key file");
    assert!(loaded.starts_with("-----BEGIN PUBLIC KEY-----"));

    // The file:// form resolves to the same content.
    let via_uri = load_key_material(&format!("file://{path}")).expect("readable key file");
    assert_eq!(loaded, via_uri);
}

#[test]
fn test_load_key_material_passes_pem_literals_through() {
    let pem = "-----BEGIN PUBLIC KEY-----\nabc\n-----END PUBLIC KEY-----";
    assert_eq!(load_key_material(pem).expect("pem literal"), pem);
}

#[test]
fn test_load_key_material_rejects_garbage() {
    assert!(load_key_material("/no/such/key.pem").is_err());
    assert!(load_key_material("").is_err());
}
