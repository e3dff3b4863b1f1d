//! End-to-end tests of the `esmod` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn esmod(cwd: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("esmod");
    cmd.current_dir(cwd).env_remove("RUST_LOG").arg("--no-color");
    cmd
}

fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    fs::create_dir_all(src.join("components")).unwrap();
    fs::write(
        src.join("index.ts"),
        "import { App } from './components/App';\nimport data from './data.json';\nimport React from 'react';\n",
    )
    .unwrap();
    fs::write(
        src.join("components/App.tsx"),
        "import Add from '@mui/icons-material/Add';\nimport { helper } from '../helper.js';\nexport const App = () => <Add />;\n",
    )
    .unwrap();
    temp
}

#[test]
fn default_codemod_adds_js_extensions() {
    let temp = project();

    esmod(temp.path())
        .arg("src")
        .assert()
        .success()
        .stdout(predicate::str::contains("In 1 file(s), converted:"))
        .stdout(predicate::str::contains("  1 jsImports"))
        .stdout(predicate::str::contains("  1 jsonImports"));

    assert_eq!(
        fs::read_to_string(temp.path().join("src/index.ts")).unwrap(),
        "import { App } from './components/App.js';\nimport data from './data.json' with { type: 'json' };\nimport React from 'react';\n"
    );
}

#[test]
fn selects_codemod_with_type_flag() {
    let temp = project();

    esmod(temp.path())
        .args(["-t", "merge-mui-icons", "src"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 muiIconImports"));

    let app = fs::read_to_string(temp.path().join("src/components/App.tsx")).unwrap();
    assert!(app.starts_with("import { Add } from '@mui/icons-material';\n"));
}

#[test]
fn reports_no_changes() {
    let temp = project();

    esmod(temp.path())
        .args(["--type", "react-query-v5-migrate", "src"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No files changed!"));
}

#[test]
fn unknown_codemod_lists_valid_names() {
    let temp = project();
    let before = fs::read_to_string(temp.path().join("src/index.ts")).unwrap();

    esmod(temp.path())
        .args(["-t", "bogus", "src"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported codemod 'bogus'"))
        .stderr(predicate::str::contains("convert-to-.js-imports"))
        .stderr(predicate::str::contains("react-query-v5-migrate"));

    assert_eq!(
        fs::read_to_string(temp.path().join("src/index.ts")).unwrap(),
        before
    );
}

#[test]
fn missing_directory_fails() {
    let temp = TempDir::new().unwrap();

    esmod(temp.path())
        .arg("nope")
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn json_report() {
    let temp = project();

    let assert = esmod(temp.path())
        .args(["--json", "-q", "-t", "remove-.js-imports", "src"])
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["fileCount"], 1);
    assert_eq!(report["transformed"][0]["name"], "removeJsImports");
    assert_eq!(report["transformed"][0]["count"], 1);
}

#[test]
fn reads_esmod_toml_from_current_directory() {
    let temp = project();
    fs::write(
        temp.path().join("esmod.toml"),
        "codemod = \"merge-mui-icons\"\niconLibrary = \"@mui/icons-material\"\n",
    )
    .unwrap();

    esmod(temp.path())
        .arg("src")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 muiIconImports"));
}

#[test]
fn environment_overrides_config_file() {
    let temp = project();
    fs::write(temp.path().join("esmod.toml"), "codemod = \"merge-mui-icons\"\n").unwrap();

    esmod(temp.path())
        .env("ESMOD_CODEMOD", "remove-.js-imports")
        .arg("src")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 removeJsImports"));
}

#[test]
fn invalid_config_is_rejected() {
    let temp = project();
    fs::write(temp.path().join("esmod.toml"), "sourceExtensions = []\n").unwrap();

    esmod(temp.path())
        .arg("src")
        .assert()
        .failure()
        .stderr(predicate::str::contains("sourceExtensions"));
}

#[test]
fn logs_rewritten_files_on_stderr() {
    let temp = project();

    esmod(temp.path())
        .arg("src")
        .assert()
        .success()
        .stderr(predicate::str::contains("index.ts"));
}
