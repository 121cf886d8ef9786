use crate::types::LogLevel;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use writerops_engine::Period;

#[derive(Parser)]
#[command(name = "writerops")]
#[command(about = "Log daily writing sessions and roll them up into reports", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Data directory (default: $WRITEROPS_PATH, or the current directory when it holds daily/ or config.json)"
    )]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Save scene text (ends with two blank lines or EOF)")]
    SaveScene {
        #[arg(long)]
        title: Option<String>,

        #[arg(long, help = "Write stories/{slug}_{timestamp}.json instead of scenes/NNN_{slug}.txt")]
        json: bool,
    },

    #[command(about = "Record today's session and update progress")]
    Finish {
        #[arg(long, help = "Characters written")]
        chars: Option<u64>,

        #[arg(long, help = "1, 2, 3 or ★/★★/★★★")]
        difficulty: Option<String>,

        #[arg(long, help = "One-line scene summary")]
        summary: Option<String>,

        #[arg(long, help = "Scene identifier stored with a highlight")]
        location: Option<String>,

        #[arg(long, help = "Mark the session as written in emergency mode")]
        emergency: bool,

        #[arg(long, help = "Session date (YYYY-MM-DD, default: today)")]
        date: Option<NaiveDate>,

        #[arg(long, help = "Skip the classifier and record the role as 미분류")]
        no_classify: bool,
    },

    #[command(about = "Build the report for an ISO week")]
    Weekly {
        #[arg(long, help = "Any date inside the week (default: today)")]
        date: Option<NaiveDate>,
    },

    #[command(about = "Build the report for a calendar month")]
    Monthly {
        #[arg(long, value_parser = parse_month, help = "Month as YYYY-MM (default: this month)")]
        month: Option<Period>,

        #[arg(long, help = "Skip the narrative analyses")]
        no_classify: bool,
    },

    #[command(about = "Show a day's record and overall progress")]
    Show {
        #[arg(long, help = "Date to show (YYYY-MM-DD, default: today)")]
        date: Option<NaiveDate>,
    },

    #[command(about = "List highlight scenes")]
    Highlights,
}

fn parse_month(raw: &str) -> Result<Period, String> {
    let (year, month) = raw
        .trim()
        .split_once('-')
        .ok_or_else(|| format!("expected YYYY-MM, got '{}'", raw))?;
    let year: i32 = year
        .parse()
        .map_err(|_| format!("invalid year in '{}'", raw))?;
    let month: u32 = month
        .parse()
        .map_err(|_| format!("invalid month in '{}'", raw))?;
    Period::month(year, month).ok_or_else(|| format!("no such month: '{}'", raw))
}
