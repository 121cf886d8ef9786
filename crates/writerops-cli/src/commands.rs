use crate::args::{Cli, Commands};
use crate::handlers;
use crate::logging;
use crate::presentation::Style;
use crate::prompt::Prompter;
use anyhow::{Context, Result};
use chrono::Local;
use std::io;
use writerops_engine::Period;
use writerops_runtime::{Classifier, SETTINGS_FILE, Settings};
use writerops_store::{Store, resolve_data_dir};

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    tracing::debug!(data_dir = %data_dir.display(), "resolved data directory");

    let store = Store::open(&data_dir);
    let settings_path = data_dir.join(SETTINGS_FILE);
    let settings = Settings::load_from(&settings_path)
        .with_context(|| format!("failed to load {}", settings_path.display()))?;

    let style = Style::detect();
    let today = Local::now().date_naive();
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stderr());

    match cli.command {
        Commands::SaveScene { title, json } => {
            handlers::scene::handle(&store, &mut prompter, title, json)
        }

        Commands::Finish {
            chars,
            difficulty,
            summary,
            location,
            emergency,
            date,
            no_classify,
        } => {
            let classifier = if no_classify {
                Classifier::disabled()
            } else {
                Classifier::from_settings(&settings.classifier)
            };
            let flags = handlers::finish::FinishFlags {
                chars,
                difficulty,
                summary,
                location,
                emergency,
                date: date.unwrap_or(today),
            };
            handlers::finish::handle(&store, &classifier, &mut prompter, flags, style)
        }

        Commands::Weekly { date } => handlers::report::weekly(&store, date.unwrap_or(today)),

        Commands::Monthly { month, no_classify } => {
            let classifier = if no_classify {
                Classifier::disabled()
            } else {
                Classifier::from_settings(&settings.classifier)
            };
            let period = month.unwrap_or_else(|| Period::month_of(today));
            handlers::report::monthly(&store, &classifier, period)
        }

        Commands::Show { date } => handlers::show::handle(&store, date.unwrap_or(today), style),

        Commands::Highlights => handlers::highlights::handle(&store, style),
    }
}
