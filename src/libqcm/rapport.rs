//! Flat text report of a question bank.

use crate::question::{letter, QuestionRecord};
use log::debug;

pub const TITRE: &str = "LISTE COMPLÈTE DES QUESTIONS ET RÉPONSES QCM ANDROID/KOTLIN";
const SOULIGNEMENT: &str = "===========================================================";
const SEPARATEUR: &str = "-----------------------------------------------------------";
const CORRECT: &str = " [CORRECT]";

pub fn render(questions: &[QuestionRecord]) -> String {
    let mut output = format!("{}\n{}\n\n", TITRE, SOULIGNEMENT);
    for question in questions {
        render_question(&mut output, question);
    }
    debug!(
        "[Rapport] Rendered {} questions ({} bytes)",
        questions.len(),
        output.len()
    );
    output
}

fn render_question(output: &mut String, q: &QuestionRecord) {
    output.push_str(&format!("Question {} :\n", q.id));
    output.push_str(&format!("{}\n\n", q.question));

    for (i, option) in q.options.iter().enumerate() {
        let mark = if q.is_correct(i) { CORRECT } else { "" };
        output.push_str(&format!("{}. {}{}\n", letter(i), option, mark));
    }

    let letters: Vec<String> = q
        .correct_answers
        .iter()
        .map(|&i| letter(i).to_string())
        .collect();
    output.push_str(&format!("\nRéponses correctes : {}\n", letters.join(", ")));

    if let Some(explanation) = q.explanation() {
        output.push_str(&format!("Explication : {}\n", explanation));
    }

    output.push_str(&format!("\n{}\n\n", SEPARATEUR));
}
