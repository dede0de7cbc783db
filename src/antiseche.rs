use clap::Parser;
use colored::Colorize;
use env_logger::Env;
use libqcm::antiseche;
use libqcm::fichier::{self, Paths, ANTISECHE_HTML, MOTS_CLES_TXT};
use log::{error, info};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "Antisèche QCM")]
#[command(version, about = "Turns a keyword list into a printable HTML cheatsheet", long_about = None)]
struct Args {
    #[arg(short, long, value_name = "FILE", default_value = MOTS_CLES_TXT)]
    input: PathBuf,
    #[arg(short, long, value_name = "FILE", default_value = ANTISECHE_HTML)]
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
        format!("Keywords at {:?}, cheatsheet to {:?}", paths.input, paths.output).cyan()
    );

    match run(&paths) {
        Ok(cards) => {
            info!("{}", format!("{} cards", cards).blue());
            println!(
                "{}",
                format!("HTML generated at {}", paths.output.display()).green()
            );
        }
        Err(e) => {
            error!("{}{}", "Error generating cheatsheet: ".red(), e);
            std::process::exit(1);
        }
    }
}

fn run(paths: &Paths) -> libqcm::Result<usize> {
    let raw = fichier::read_to_string(&paths.input)?;
    let blocks = antiseche::parse_blocks(&raw);
    let html = antiseche::render(&blocks);
    fichier::write(&paths.output, &html)?;
    Ok(blocks.len())
}
