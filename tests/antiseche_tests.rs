use libqcm::antiseche::{self, SEPARATOR};
use libqcm::{fichier, ErrorKind};
use std::fs;
use tempfile::TempDir;

fn generate(dir: &TempDir, raw: &str) -> libqcm::Result<String> {
    let input = dir.path().join("mots_cles_qcm.txt");
    let output = dir.path().join("cheatsheet.html");
    fs::write(&input, raw).unwrap();

    let blocks = antiseche::parse_blocks(&fichier::read_to_string(&input)?);
    fichier::write(&output, &antiseche::render(&blocks))?;
    Ok(fs::read_to_string(&output).unwrap())
}

#[test]
fn generates_one_card_per_block() {
    let dir = TempDir::new().unwrap();
    let raw = format!(
        "Title1\n- A1\n- A2\n{0}\nTitle2\nA3\n{0}\n\n   \n{0}\n",
        SEPARATOR
    );
    let html = generate(&dir, &raw).unwrap();

    // four segments, two blank
    assert_eq!(html.matches(r#"<div class="card">"#).count(), 2);
    assert!(html.contains(r#"<div class="question">Title1</div>"#));
    assert!(html.contains("<li>A1</li><li>A2</li>"));
    assert!(html.contains(r#"<div class="question">Title2</div>"#));
    assert!(html.contains("<li>A3</li>"));
}

#[test]
fn document_is_self_contained() {
    let dir = TempDir::new().unwrap();
    let html = generate(&dir, "T\n- a").unwrap();
    assert!(html.contains(r#"<html lang="fr">"#));
    assert!(html.contains("<title>QCM Mots Clés</title>"));
    assert!(html.contains("fonts.googleapis.com/css2?family=Roboto"));
    assert!(html.contains("break-inside: avoid-column;"));
    assert!(html.contains("column-count: 3;"));
}

#[test]
fn markup_in_keywords_is_escaped() {
    let dir = TempDir::new().unwrap();
    let html = generate(&dir, "<script>alert(1)</script>\n- List<String>").unwrap();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("<li>List&lt;String&gt;</li>"));
}

#[test]
fn regenerating_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let raw = format!("A\n- 1\n{}\nB\n- 2", SEPARATOR);
    assert_eq!(generate(&dir, &raw).unwrap(), generate(&dir, &raw).unwrap());
}

#[test]
fn missing_keywords_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let err = fichier::read_to_string(&dir.path().join("absent.txt")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Read);
}
