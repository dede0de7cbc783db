use clap::Parser;
use colored::Colorize;
use env_logger::Env;
use libqcm::fichier::{self, Paths, QUESTIONS_JSON, RAPPORT_TXT};
use libqcm::{question, rapport};
use log::{error, info, warn};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "Exportateur QCM")]
#[command(version, about = "Exports the question bank to a flat text report", long_about = None)]
struct Args {
    #[arg(short, long, value_name = "FILE", default_value = QUESTIONS_JSON)]
    input: PathBuf,
    #[arg(short, long, value_name = "FILE", default_value = RAPPORT_TXT)]
    output: PathBuf,
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level)).init();

    let paths = Paths::new(args.input, args.output);
    info!(
        "{}",
        format!("Questions at {:?}, report to {:?}", paths.input, paths.output).cyan()
    );

    match run(&paths) {
        Ok(count) => println!(
            "{}",
            format!(
                "Successfully exported {} questions to {}",
                count,
                paths.output.display()
            )
            .green()
        ),
        Err(e) => {
            error!("{}{}", "Error processing file: ".red(), e);
            std::process::exit(1);
        }
    }
}

fn run(paths: &Paths) -> libqcm::Result<usize> {
    let questions = question::load(&paths.input)?;

    for q in &questions {
        let bad = q.out_of_range_answers();
        if !bad.is_empty() {
            warn!(
                "{}",
                format!(
                    "Question {}: correct answers {:?} point past its {} options",
                    q.id,
                    bad,
                    q.options.len()
                )
                .yellow()
            );
        }
    }

    let report = rapport::render(&questions);
    fichier::write(&paths.output, &report)?;
    Ok(questions.len())
}
