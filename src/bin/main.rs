use clap::Parser;
use filter_core::persistence::save_snapshot;
use filter_core::skill::{SkillRequest, SkillResponse};
use filter_core::{global, FilterConfig, FilterEngine};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "filter_engine")]
#[command(about = "Hangul bad-word detector speaking a line protocol on stdin", long_about = None)]
struct Args {
    /// JSON config file (seed words, tables). Stock data when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Bad-form index snapshot, reused when it matches the config
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Read chatbot skill requests (one JSON per line) and answer with reply JSON
    #[arg(long)]
    skill: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "filter_core=info,filter_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = match &args.config {
        Some(path) => FilterConfig::load(path)?,
        None => FilterConfig::default(),
    };

    let engine = match &args.snapshot {
        Some(path) => {
            let (engine, reused) = FilterEngine::from_snapshot_or_build(config, path)?;
            if !reused {
                if let Err(e) = save_snapshot(&engine, path) {
                    warn!(path = %path.display(), error = %e, "could not save snapshot");
                }
            }
            engine
        }
        None => FilterEngine::with_config(config)?,
    };
    let engine = global::install(engine)?;
    info!("filter engine ready");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let input = line?;
        debug!("<- {:?}", input);

        if args.skill {
            answer_skill(engine, &input, &mut stdout)?;
            continue;
        }

        let (command, text) = input.split_once(' ').unwrap_or((input.as_str(), ""));
        match command {
            "DETECT" => {
                let verdict = if engine.detect(text) { "DETECTED" } else { "CLEAN" };
                writeln!(stdout, "{verdict}")?;
            }
            "FORMS" => {
                for form in engine.forms(text) {
                    writeln!(stdout, "FORM {form}")?;
                }
                writeln!(stdout, "END")?;
            }
            "EXIT" => break,
            "" => continue,
            _ => {
                warn!(command, "unknown command");
                writeln!(stdout, "ERROR unknown command {command}")?;
            }
        }
        stdout.flush()?;
    }

    info!("shutting down");
    Ok(())
}

fn answer_skill(engine: &FilterEngine, input: &str, stdout: &mut impl Write) -> anyhow::Result<()> {
    let response = match serde_json::from_str::<SkillRequest>(input) {
        Ok(request) => {
            let utterance = request.utterance();
            SkillResponse::for_detection(utterance, engine.detect(utterance))
        }
        Err(e) => {
            warn!(error = %e, "malformed skill request");
            SkillResponse::for_detection("", false)
        }
    };
    debug!(reply = response.text(), "skill reply");
    writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
    stdout.flush()?;
    Ok(())
}
