use anyhow::{Context, Result};
use clap::Parser;

use carddeck::cli::{CliArgs, Command};
use carddeck::config::CascadeConfig;
use carddeck::config_paths;
use carddeck::persistence::SavedState;
use carddeck::script::{GestureScript, Replay};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    let base = args.resolve_config()?;

    match &args.command {
        Command::Replay { script, persist } => {
            let script = GestureScript::load(script)?;
            let mut config = script.effective_config(&base);
            args.apply_overrides(&mut config);
            carddeck::tracing::init(config.log_level);

            let state_path = config_paths::state_file();
            let state = match (&state_path, persist) {
                (Some(path), true) => SavedState::load(path),
                _ => SavedState::default(),
            };

            let replay = script.run(config, state)?;
            print_replay(&replay);

            if let (Some(path), true) = (&state_path, persist) {
                replay
                    .state
                    .save(path)
                    .with_context(|| format!("Failed to save state to {}", path.display()))?;
            }
        }
        Command::Config { save } => {
            carddeck::tracing::init(base.log_level);
            print_config(&base)?;
            if *save {
                base.save()?;
            }
        }
    }

    Ok(())
}

fn print_replay(replay: &Replay) {
    for (i, report) in replay.reports.iter().enumerate() {
        match report.result {
            Some(result) => println!("#{:<3} {:?} -> {:?}", i + 1, report.step, result),
            None => println!("#{:<3} {:?}", i + 1, report.step),
        }
        for (layer, offset) in &report.offsets {
            println!("       layer {} offset {}", layer, offset);
        }
    }

    println!();
    for (layer, offset) in &replay.final_offsets {
        println!("layer {}: {}", layer, offset);
    }
    println!("was ever opened: {}", replay.state.was_ever_opened);
}

fn print_config(config: &CascadeConfig) -> Result<()> {
    let yaml = serde_yaml::to_string(config).context("Failed to serialize config")?;
    print!("{}", yaml);
    Ok(())
}
