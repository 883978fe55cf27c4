use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("section_compiler").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn fixture_input(root: &Path) -> std::path::PathBuf {
    let input = root.join("input");
    fs::create_dir_all(&input).unwrap();
    fs::write(input.join("a.txt"), "_INTRO.Hello world._BODY.More text.").unwrap();
    fs::write(input.join("b.txt"), "preamble\n_BODY.\n  Second body.  \n_OTHER.not requested\n").unwrap();
    fs::write(input.join("notes.md"), "_INTRO.ignored, wrong extension").unwrap();
    input
}

fn output_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn compiles_one_file_per_keyword() {
    let tmp = TempDir::new().unwrap();
    let input = fixture_input(tmp.path());
    let out = tmp.path().join("out");

    cmd()
        .arg("--input-dir").arg(&input)
        .args(["-k", "INTRO,BODY", "-k", "FOOTER"])
        .arg("--output-dir").arg(&out)
        .assert()
        .success()
        .stderr(contains("Extraction complete"));

    assert_eq!(output_files(&out), vec!["BODY.txt", "FOOTER.txt", "INTRO.txt"]);
    assert_eq!(fs::read_to_string(out.join("INTRO.txt")).unwrap(), "Hello world.\n\n\n\n\n\n");
    assert_eq!(
        fs::read_to_string(out.join("BODY.txt")).unwrap(),
        "More text.\n\n\n\nSecond body.\n\n\n\n"
    );
    let footer = fs::read_to_string(out.join("FOOTER.txt")).unwrap();
    assert!(footer.trim().is_empty());
}

#[test]
fn repeated_runs_are_byte_identical() {
    let tmp = TempDir::new().unwrap();
    let input = fixture_input(tmp.path());

    for run in ["first", "second"] {
        cmd()
            .arg("-i").arg(&input)
            .args(["-k", "INTRO,BODY"])
            .arg("-o").arg(tmp.path().join(run))
            .assert()
            .success();
    }

    for name in ["INTRO.txt", "BODY.txt"] {
        assert_eq!(
            fs::read(tmp.path().join("first").join(name)).unwrap(),
            fs::read(tmp.path().join("second").join(name)).unwrap()
        );
    }
}

#[test]
fn failing_file_aborts_without_output() {
    let tmp = TempDir::new().unwrap();
    let input = fixture_input(tmp.path());
    // UTF-16LE BOM with a dangling odd byte cannot be decoded.
    fs::write(input.join("c.txt"), [0xFF, 0xFE, b'_', 0x00, b'X']).unwrap();
    let out = tmp.path().join("out");

    cmd()
        .arg("-i").arg(&input)
        .args(["-k", "INTRO"])
        .arg("-o").arg(&out)
        .assert()
        .failure()
        .stderr(contains("c.txt"));

    assert!(!out.exists());
}

#[test]
fn blank_output_answer_cancels() {
    let tmp = TempDir::new().unwrap();
    let input = fixture_input(tmp.path());

    cmd()
        .arg("-i").arg(&input)
        .args(["-k", "INTRO"])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(contains("Output folder"))
        .stderr(contains("Extraction cancelled"));

    assert_eq!(output_files(tmp.path()), vec!["input"]);
}

#[test]
fn prompts_for_keywords_and_output_dir() {
    let tmp = TempDir::new().unwrap();
    let input = fixture_input(tmp.path());
    let out = tmp.path().join("prompted");

    cmd()
        .arg("-i").arg(&input)
        .write_stdin(format!("BODY\n\n{}\n", out.display()))
        .assert()
        .success()
        .stdout(contains("_BODY. added"));

    assert_eq!(output_files(&out), vec!["BODY.txt"]);
}

#[test]
fn no_keywords_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let input = fixture_input(tmp.path());

    cmd()
        .arg("-i").arg(&input)
        .write_stdin("\n")
        .assert()
        .failure()
        .stderr(contains("Please enter at least one keyword"));
}

#[test]
fn invalid_keyword_flag_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let input = fixture_input(tmp.path());

    cmd()
        .arg("-i").arg(&input)
        .args(["-k", "_INTRO."])
        .arg("-o").arg(tmp.path().join("out"))
        .assert()
        .failure()
        .stderr(contains("Invalid keyword"));
}

#[test]
fn manifest_is_written_on_request() {
    let tmp = TempDir::new().unwrap();
    let input = fixture_input(tmp.path());
    let out = tmp.path().join("out");

    cmd()
        .arg("-i").arg(&input)
        .args(["-k", "INTRO", "--manifest"])
        .arg("-o").arg(&out)
        .assert()
        .success();

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("section_compiler_manifest.json")).unwrap()).unwrap();
    assert_eq!(manifest["files"].as_array().unwrap().len(), 2);
    assert_eq!(manifest["keywords"], serde_json::json!(["INTRO"]));
}

#[test]
fn custom_extension_applies_to_input_and_output() {
    let tmp = TempDir::new().unwrap();
    let input = fixture_input(tmp.path());
    let out = tmp.path().join("out");

    cmd()
        .arg("-i").arg(&input)
        .args(["-k", "INTRO", "-e", "md"])
        .arg("-o").arg(&out)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(out.join("INTRO.md")).unwrap(),
        "ignored, wrong extension\n\n\n\n"
    );
}
