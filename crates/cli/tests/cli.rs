use assert_cmd::Command;

fn catalog() -> Command {
    let mut cmd = Command::cargo_bin("catalog").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("CATALOG_ENV")
        .env("CATALOG_CONFIG_DIR", concat!(env!("CARGO_MANIFEST_DIR"), "/../../config"));
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn list_prints_every_book() {
    let out = stdout_of(catalog().arg("list"));
    assert!(out.starts_with("Library Catalog"));
    assert_eq!(out.lines().count(), 7);
    assert!(out.contains("Due: 2026-03-15"));
}

#[test]
fn list_filters_and_localizes() {
    let out = stdout_of(catalog().args(["list", "--genre", "science", "--locale", "es"]));
    assert!(out.starts_with("Catálogo de la biblioteca"));
    assert!(out.contains("Cosmos / Carl Sagan [Ciencia]"));
    assert!(!out.contains("Sapiens"));
}

#[test]
fn list_reports_no_results() {
    let out = stdout_of(catalog().args(["list", "--genre", "fiction", "-q", "zzz"]));
    assert!(out.contains("No books found matching your search."));
}

#[test]
fn list_json_echoes_filter() {
    let out = stdout_of(catalog().args(["list", "-q", "SAGAN", "--json"]));
    let listing: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(listing["query"], "SAGAN");
    assert_eq!(listing["count"], 1);
    assert_eq!(listing["books"][0]["slug"], "cosmos");
}

#[test]
fn unknown_genre_is_a_usage_error() {
    catalog()
        .args(["list", "--genre", "poetry"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn show_prints_localized_detail() {
    let out = stdout_of(catalog().args(["show", "the-art-of-war", "--locale", "fr"]));
    assert!(out.starts_with("The Art of War"));
    assert!(out.contains("Philosophie"));
    assert!(out.contains("Titres similaires"));
    assert!(out.contains("Sapiens / Yuval Noah Harari"));
}

#[test]
fn show_unknown_slug_fails() {
    let assert = catalog().args(["show", "dune"]).assert().failure();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("no book with slug 'dune'"));
}

#[test]
fn check_passes_on_shipped_catalog() {
    let out = stdout_of(catalog().arg("check"));
    assert_eq!(out.trim(), "catalog ok: 6 books");
}
