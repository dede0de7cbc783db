//! Keyword cheatsheet: parses a dash-separated list of blocks and lays
//! them out as cards in a printable HTML page.
//!
//! # Format
//! ```text
//! Titre de la question
//! - mot clé 1
//! - mot clé 2
//! ----------------------------------------
//! Autre question
//! réponse
//! ```

use log::debug;

/// 40 dashes.
pub const SEPARATOR: &str = "----------------------------------------";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheatsheetBlock {
    pub title: String,
    pub answers: Vec<String>,
}

pub fn parse_blocks(raw: &str) -> Vec<CheatsheetBlock> {
    let blocks: Vec<CheatsheetBlock> = raw.split(SEPARATOR).filter_map(parse_block).collect();
    debug!("[Antisèche] Parsed {} blocks", blocks.len());
    blocks
}

fn parse_block(segment: &str) -> Option<CheatsheetBlock> {
    let mut lines = segment
        .trim()
        .split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty());

    let title = lines.next()?.to_string();
    let answers = lines.map(|l| strip_marker(l).to_string()).collect();
    Some(CheatsheetBlock { title, answers })
}

/// Drops a leading `-` and the whitespace right after it.
fn strip_marker(line: &str) -> &str {
    match line.strip_prefix('-') {
        Some(rest) => rest.trim_start(),
        None => line,
    }
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn render_card(block: &CheatsheetBlock) -> String {
    let items: String = block
        .answers
        .iter()
        .map(|a| format!("<li>{}</li>", escape_html(a)))
        .collect();

    format!(
        r#"
    <div class="card">
        <div class="question">{}</div>
        <ul class="answers">
            {}
        </ul>
    </div>
    "#,
        escape_html(&block.title),
        items
    )
}

pub fn render(blocks: &[CheatsheetBlock]) -> String {
    let cards: String = blocks.iter().map(render_card).collect();
    format!("{}{}{}", DOCUMENT_HEAD, cards, DOCUMENT_TAIL)
}

const DOCUMENT_HEAD: &str = r#"
<!DOCTYPE html>
<html lang="fr">
<head>
    <meta charset="UTF-8">
    <title>QCM Mots Clés</title>
    <style>
        @import url('https://fonts.googleapis.com/css2?family=Roboto:wght@400;700&display=swap');

        body {
            background-color: #1e1e1e;
            color: #e0e0e0;
            font-family: 'Roboto', sans-serif;
            margin: 0;
            padding: 20px;
            font-size: 12px;
        }

        .container {
            column-count: 3;
            column-gap: 20px;
            column-rule: 1px solid #444;
            width: 100%;
        }

        @media print {
            @page {
                size: A4 portrait;
                margin: 1cm;
            }
            body {
                background-color: #1e1e1e;
                -webkit-print-color-adjust: exact;
                print-color-adjust: exact;
            }
            .container {
                column-count: 3;
            }
        }

        .card {
            background-color: #252526;
            border: 1px solid #3e3e42;
            border-radius: 4px;
            padding: 8px;
            margin-bottom: 12px;
            break-inside: avoid-column;
            page-break-inside: avoid;
            display: inline-block;
            width: 100%;
            box-sizing: border-box;
        }

        .question {
            font-weight: 700;
            color: #ff6b6b;
            margin-bottom: 4px;
            border-bottom: 1px solid #333;
            padding-bottom: 4px;
        }

        .answers {
            list-style-type: none;
            padding-left: 0;
            margin: 0;
        }

        .answers li {
            position: relative;
            padding-left: 10px;
            margin-bottom: 2px;
            line-height: 1.3;
            color: #dcdcdc;
        }

        .answers li::before {
            content: "-";
            position: absolute;
            left: 0;
            color: #888;
        }
    </style>
</head>
<body>
    <div class="container">
        "#;

const DOCUMENT_TAIL: &str = r#"
    </div>
</body>
</html>
"#;
