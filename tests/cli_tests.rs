use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn run_a2tex(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_a2tex"))
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_cli_success_uses_default_file_names() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("authors.csv"),
        "Firstnames,Lastname,Affiliation,ORCID\nJane,Doe,MIT,\n",
    )
    .unwrap();

    let output = run_a2tex(temp_dir.path(), &["--affiliation-numbers"]);

    assert_eq!(output.status.code(), Some(a2tex::EXIT_STATUS_SUCCESS as i32));
    let latex = fs::read_to_string(temp_dir.path().join("hep-eppsu-software-authors.tex")).unwrap();
    assert_eq!(latex, "\\author[1]{Jane~Doe}\n\n\\affiliation[1]{MIT}\n");
    let arxiv = fs::read_to_string(temp_dir.path().join("hep-eppsu-software-authors.arxiv")).unwrap();
    assert_eq!(arxiv, "HEP Software Foundation: Jane Doe\n");
}

#[test]
fn test_cli_conflicting_index_flags_is_option_error() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_a2tex(
        temp_dir.path(),
        &["--affiliation-letters", "--affiliation-numbers"],
    );

    assert_eq!(output.status.code(), Some(a2tex::EXIT_STATUS_OPTION_ERROR as i32));
}

#[test]
fn test_cli_unknown_flag_is_option_error() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_a2tex(temp_dir.path(), &["--no-such-flag"]);

    assert_eq!(output.status.code(), Some(a2tex::EXIT_STATUS_OPTION_ERROR as i32));
}

#[test]
fn test_cli_missing_input_is_failure() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_a2tex(temp_dir.path(), &["--authors-csv", "nope.csv"]);

    assert_eq!(output.status.code(), Some(a2tex::EXIT_STATUS_FAILURE as i32));
    assert!(String::from_utf8_lossy(&output.stderr).contains("nope.csv"));
}

#[test]
fn test_cli_help_exits_successfully() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_a2tex(temp_dir.path(), &["--help"]);

    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_cli_latex_escape_is_opt_in() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("authors.csv"),
        "Firstnames,Lastname,Affiliation,ORCID\nJane,Doe,AT&T Labs,\n",
    )
    .unwrap();
    let tex = temp_dir.path().join("hep-eppsu-software-authors.tex");

    let output = run_a2tex(temp_dir.path(), &[]);
    assert_eq!(output.status.code(), Some(a2tex::EXIT_STATUS_SUCCESS as i32));
    assert!(fs::read_to_string(&tex).unwrap().contains("\\affiliation[a]{AT&T Labs}"));

    let output = run_a2tex(temp_dir.path(), &["--latex-escape"]);
    assert_eq!(output.status.code(), Some(a2tex::EXIT_STATUS_SUCCESS as i32));
    assert!(fs::read_to_string(&tex).unwrap().contains("\\affiliation[a]{AT\\&T Labs}"));
}
