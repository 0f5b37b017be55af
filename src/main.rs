use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::{Parser, Subcommand, ValueEnum};
use kartfinder::{
    AppConfig, KartFinder, KartFinderError, Selections, Theme,
    catalog::RACE_CLASSES,
    finder::{AgeBracket, Budget, EnginePreference, Experience},
    recommend, render,
};
use log::{error, info, warn};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Recommend chassis, engines and classes for a set of answers
    Recommend {
        /// Age bracket: 5-7, 8-12, 12-15, 15+ or 32+
        #[arg(short, long)]
        age: Option<AgeBracket>,

        /// brand-new, rental, some-experience or experienced
        #[arg(short, long)]
        experience: Option<Experience>,

        /// four-stroke, two-stroke or not-sure
        #[arg(short = 'n', long)]
        engine: Option<EnginePreference>,

        /// entry, mid, premium or flexible
        #[arg(short, long)]
        budget: Option<Budget>,

        /// Print the recommendation as JSON
        #[arg(long)]
        json: bool,
    },
    /// Answer the finder questions one step at a time
    Wizard,
    /// Evaluate a JSON-lines file of answers
    Batch {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        output: PathBuf,
    },
    /// List every race class
    Classes,
    /// Show or change the saved colour theme
    Theme { value: Option<ThemeArg> },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ThemeArg {
    Light,
    Dark,
    Toggle,
}

fn load_config() -> AppConfig {
    match AppConfig::from_local_file() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            warn!("Could not load config, using defaults: {}", e);
            AppConfig::default()
        }
    }
}

fn recommend_once(selections: Selections, json: bool, theme: Theme) -> Result<(), KartFinderError> {
    let recommendation = recommend(&selections);
    if json {
        let out = serde_json::to_string_pretty(&recommendation)
            .map_err(|e| KartFinderError::OutputSerializeError { source: e })?;
        println!("{out}");
    } else {
        print!("{}", render::render_recommendation(&recommendation, theme));
    }
    Ok(())
}

fn wizard(theme: Theme) -> Result<(), KartFinderError> {
    let mut finder = KartFinder::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        match finder.current_step() {
            Some(step) => print!("\n{}", render::render_step_prompt(step)),
            None => {
                if let Some(recommendation) = finder.results() {
                    print!("\n{}", render::render_recommendation(&recommendation, theme));
                }
                println!("\nType 'restart' to start over or 'quit' to exit.");
            }
        }
        if finder.can_go_back() {
            println!("(type 'back' to change your previous answer)");
        }
        print!("> ");
        io::stdout()
            .flush()
            .map_err(|e| KartFinderError::WizardInputError { source: e })?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line.map_err(|e| KartFinderError::WizardInputError { source: e })?;
        let input = line.trim();

        match input {
            "quit" | "q" | "exit" => return Ok(()),
            "back" => finder.back(),
            "restart" => finder.restart(),
            "" => {}
            _ => {
                let Some(step) = finder.current_step() else {
                    continue;
                };
                match step.resolve_input(input) {
                    Ok(code) => finder.select(code),
                    Err(e) => println!("{e}"),
                }
            }
        }
    }
}

fn theme(value: Option<ThemeArg>) -> Result<(), KartFinderError> {
    let mut config = load_config();
    let Some(value) = value else {
        println!("{}", config.theme);
        return Ok(());
    };

    config.theme = match value {
        ThemeArg::Light => Theme::Light,
        ThemeArg::Dark => Theme::Dark,
        ThemeArg::Toggle => config.theme.toggled(),
    };
    config.save()?;
    info!("Theme set to {}", config.theme);
    println!("{}", config.theme);
    Ok(())
}

fn run(cli: Args) -> Result<(), KartFinderError> {
    let config = load_config();
    match cli.command {
        Commands::Recommend {
            age,
            experience,
            engine,
            budget,
            json,
        } => recommend_once(
            Selections {
                age,
                experience,
                engine,
                budget,
            },
            json,
            config.theme,
        ),
        Commands::Wizard => {
            if let Err(e) = ctrlc::set_handler(move || {
                println!("\nExiting...");
                std::process::exit(0);
            }) {
                warn!("Could not set Ctrl-C handler: {}", e);
            }
            wizard(config.theme)
        }
        Commands::Batch { input, output } => {
            let count = kartfinder::batch::run_batch(&input, &output)?;
            println!("Wrote {count} recommendations to {}", output.display());
            Ok(())
        }
        Commands::Classes => {
            print!("{}", render::render_class_table(RACE_CLASSES));
            Ok(())
        }
        Commands::Theme { value } => theme(value),
    }
}

fn main() {
    #[cfg(debug_assertions)]
    colog::init();

    let cli = Args::parse();
    if let Err(e) = run(cli) {
        error!("{}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
