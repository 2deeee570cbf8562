use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

fn cmd(workspace: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("econsult").unwrap();
    cmd.current_dir(workspace.path())
        .env_remove("ECONSULT_DATA_DIR")
        .args(["--no-color", "--data-dir"])
        .arg(workspace.path().join("data"));
    cmd
}

fn add(workspace: &TempDir, text: &str) {
    cmd(workspace)
        .args(["comment", "add", text])
        .assert()
        .success()
        .stdout(contains("Added comment"));
}

#[test]
fn add_then_list() {
    let ws = TempDir::new().unwrap();
    add(&ws, "The definition is clear and helpful.");
    add(&ws, "Upload on the portal is slow.");

    cmd(&ws)
        .args(["comment", "list"])
        .assert()
        .success()
        .stdout(contains("[Positive]"))
        .stdout(contains("Upload on the portal is slow."))
        .stdout(contains("Posted by anonymous on "));

    assert!(ws.path().join("data/comments/draftComments.json").exists());
}

#[test]
fn add_rejects_blank_text() {
    let ws = TempDir::new().unwrap();
    cmd(&ws)
        .args(["comment", "add", "   "])
        .assert()
        .failure()
        .stderr(contains("cannot be empty"));
}

#[test]
fn report_on_empty_document() {
    let ws = TempDir::new().unwrap();
    cmd(&ws)
        .args(["report", "--format", "text"])
        .assert()
        .success()
        .stdout(contains("Report for draftComments (0 comments)"))
        .stdout(contains("no-data"));
}

#[test]
fn report_json_aggregates() {
    let ws = TempDir::new().unwrap();
    add(&ws, "Great draft, very clear.");
    add(&ws, "Portal crash and slow upload on the portal.");
    add(&ws, "Please define the term consultation.");

    let output = cmd(&ws)
        .args(["report", "--format", "json-compact"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["comment_count"], 3);
    assert_eq!(value["top_words"][0]["word"], "portal");
    assert_eq!(value["top_words"][0]["count"], 2);
    assert_eq!(value["sentiment"]["positive"], 1);
    assert_eq!(value["sentiment"]["negative"], 1);
    assert_eq!(value["sentiment"]["neutral"], 1);
    assert_eq!(value["length_buckets"][0]["count"], 3);
}

#[test]
fn report_to_file() {
    let ws = TempDir::new().unwrap();
    add(&ws, "Good draft.");

    cmd(&ws)
        .args(["report", "--format", "markdown", "--output"])
        .arg(ws.path().join("out/report"))
        .assert()
        .success()
        .stderr(contains("Exported report"));

    let md = fs::read_to_string(ws.path().join("out/report.md")).unwrap();
    assert!(md.contains("# Comment Report"));
    assert!(md.contains("> Good draft."));
}

#[test]
fn report_rejects_inverted_bounds() {
    let ws = TempDir::new().unwrap();
    cmd(&ws)
        .args(["report", "--min-words", "200", "--max-words", "100"])
        .assert()
        .failure()
        .stderr(contains("summary_min_words"));
}

#[test]
fn report_tolerates_corrupted_store() {
    let ws = TempDir::new().unwrap();
    let dir = ws.path().join("data/comments");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("draftComments.json"), "{ not json").unwrap();

    cmd(&ws)
        .args(["report", "--format", "text"])
        .assert()
        .success()
        .stdout(contains("(0 comments)"));
}

#[test]
fn documents_are_isolated() {
    let ws = TempDir::new().unwrap();
    cmd(&ws)
        .args(["comment", "add", "Slow portal", "--document", "it-rules"])
        .assert()
        .success();
    add(&ws, "Good draft");

    cmd(&ws)
        .args(["comment", "documents"])
        .assert()
        .success()
        .stdout(contains("draftComments\t1"))
        .stdout(contains("it-rules\t1"));

    cmd(&ws)
        .args(["comment", "clear", "--document", "it-rules", "--yes"])
        .assert()
        .success();

    cmd(&ws)
        .args(["comment", "list", "--document", "it-rules"])
        .assert()
        .success()
        .stdout(contains("No comments yet."));
}

#[test]
fn analyze_tokenize_and_classify() {
    let ws = TempDir::new().unwrap();
    cmd(&ws)
        .args(["analyze", "tokenize", "--json", "MCA21 is great!!"])
        .assert()
        .success()
        .stdout(contains(r#"["mca21","is","great"]"#));

    cmd(&ws)
        .args(["analyze", "classify", "good good bad"])
        .assert()
        .success()
        .stdout(contains("Positive (positive: 2, negative: 1)"));

    cmd(&ws)
        .args(["analyze", "classify", "the platform works"])
        .assert()
        .success()
        .stdout(contains("Neutral").and(contains("positive: 0")));
}

#[test]
fn config_init_and_report_uses_it() {
    let ws = TempDir::new().unwrap();
    cmd(&ws).args(["config", "init"]).assert().success();
    assert!(ws.path().join(".econsult/config.toml").exists());

    cmd(&ws).args(["config", "validate"]).assert().success();

    fs::write(
        ws.path().join(".econsult/config.toml"),
        "[analytics]\ntop_words = 1\n\n[report]\ndefault_format = \"json-compact\"\n",
    )
    .unwrap();
    add(&ws, "draft draft rules");

    cmd(&ws)
        .arg("report")
        .assert()
        .success()
        .stdout(contains(r#""top_words":[{"word":"draft","count":2}]"#));
}

#[test]
fn list_shows_author() {
    let ws = TempDir::new().unwrap();
    cmd(&ws)
        .args(["comment", "add", "Section 3 overlaps", "--author", "09261468759657256208"])
        .assert()
        .success();

    cmd(&ws)
        .args(["comment", "list"])
        .assert()
        .success()
        .stdout(contains("Posted by 09261468759657256208 on "));
}

#[test]
fn titled_comments_are_listed_by_title() {
    let ws = TempDir::new().unwrap();
    cmd(&ws)
        .args(["comment", "add", "Slow portal", "--title", "Digital Data Bill"])
        .assert()
        .success();
    cmd(&ws)
        .args(["comment", "add", "Clear scope", "--title", "digital data bill "])
        .assert()
        .success();

    cmd(&ws)
        .args(["comment", "documents"])
        .assert()
        .success()
        .stdout(contains("\t2\tDigital Data Bill"));

    cmd(&ws)
        .args(["report", "--title", "Digital Data Bill", "--format", "markdown"])
        .assert()
        .success()
        .stdout(contains("**Draft:** Digital Data Bill"))
        .stdout(contains("**Comments:** 2"));
}

#[test]
fn drafts_can_be_added_and_searched() {
    let ws = TempDir::new().unwrap();
    cmd(&ws)
        .args(["draft", "add", "Companies Act 2024 Amendments", "--intro", "Governance changes."])
        .assert()
        .success()
        .stdout(contains("Companies Act 2024 Amendments"));
    cmd(&ws)
        .args(["draft", "add", "National Environmental Policy"])
        .assert()
        .success();
    cmd(&ws)
        .args(["draft", "add", "   "])
        .assert()
        .failure()
        .stderr(contains("cannot be empty"));

    cmd(&ws)
        .args(["draft", "list", "--search", "companies"])
        .assert()
        .success()
        .stdout(contains("Companies Act 2024 Amendments"))
        .stdout(contains("Governance changes."))
        .stdout(contains("National Environmental Policy").not());

    cmd(&ws)
        .args(["draft", "list", "--search", "forest"])
        .assert()
        .success()
        .stdout(contains("No drafts found."));

    let output = cmd(&ws).args(["draft", "list", "--json"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
    assert_eq!(value[1]["title"], "National Environmental Policy");
    assert!(value[1].get("introduction").is_none());
}
