use chrono::{Local, NaiveDate};
use clap::Subcommand;
use routinely_core::{AppStore, Config, Urgency};

#[derive(Subcommand)]
pub enum DeadlineAction {
    /// List deadlines, soonest first
    List {
        /// Reference day (YYYY-MM-DD), defaults to today
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: DeadlineAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        DeadlineAction::List { today, json } => {
            let today = today.unwrap_or_else(|| Local::now().date_naive());
            let config = Config::load()?;
            // Demo deadlines are seeded relative to the reference day.
            let store = AppStore::from_config(&config, today);
            let ranked = store.ranked_deadlines(today);

            if json {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            } else if ranked.is_empty() {
                println!("No deadlines.");
            } else {
                for d in ranked {
                    let marker = match d.urgency {
                        Urgency::Urgent => "!!",
                        Urgency::Warning => "! ",
                        Urgency::Normal => "  ",
                    };
                    println!(
                        "{marker} {:<10} {:>3}d  {}  ({})",
                        d.label,
                        d.days_remaining,
                        d.title,
                        d.teammates.join(", ")
                    );
                }
            }
        }
    }
    Ok(())
}
