use chinchillo::config::Config;
use chinchillo::parse::{parse, Command};
use chinchillo::Match;
use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
commands:
  <n> | play [n] | roll [n]   play a match, each side rolling up to n times (1-3)
  style plain | markdown      change how matches are narrated
  help | ?                    show this message
  quit | exit                 leave";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stdout only carries narration
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chinchillo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut config = Config::from_env()?;
    tracing::info!(
        roll_cap = config.roll_cap.get(),
        narrator = %config.narrator,
        "starting chinchillo"
    );

    let mut rng = rand::thread_rng();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    print!("> ");
    io::stdout().flush()?;
    while let Some(line) = lines.next() {
        let line = line?;
        if !line.trim().is_empty() {
            match parse(&line) {
                Ok(Command::Play(cap)) => {
                    let result = Match::new(cap.unwrap_or(config.roll_cap))
                        .with_narrator(config.narrator)
                        .play(&mut rng);
                    println!("{}\n", result);
                }
                Ok(Command::Style(narrator)) => {
                    config.narrator = narrator;
                    println!("narration style: {}", narrator);
                }
                Ok(Command::Help) => println!("{}", HELP),
                Ok(Command::Quit) => break,
                Err(why) => eprintln!("Error: {}", why),
            }
        }
        print!("> ");
        io::stdout().flush()?;
    }
    tracing::info!("bye");
    Ok(())
}
