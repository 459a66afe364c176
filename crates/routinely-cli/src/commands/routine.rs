//! Routine catalog and live run commands.

use std::io::BufRead;
use std::time::Duration;

use clap::Subcommand;
use routinely_core::{Event, RoutineDraft, RoutineIcon, RoutineTemplate, RunDriver, RunState};
use tokio::sync::mpsc;

use super::load_store;

#[derive(Subcommand)]
pub enum RoutineAction {
    /// List routine templates
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a routine from form input
    Create {
        /// Routine name
        #[arg(long)]
        name: String,
        /// Duration in minutes (defaults to the configured value)
        #[arg(long, allow_hyphen_values = true)]
        duration: Option<String>,
        /// Time-of-day icon: morning, day or night
        #[arg(long)]
        icon: Option<RoutineIcon>,
        /// Task text, repeat for each task
        #[arg(long = "task")]
        tasks: Vec<String>,
    },
    /// Run a routine with a live countdown.
    ///
    /// Reads commands from stdin while running: `toggle <task-id>`,
    /// `status`, `stop`.
    Run {
        /// Routine ID
        id: String,
        /// Override the tick interval in milliseconds
        #[arg(long)]
        tick_ms: Option<u64>,
    },
}

pub fn run(action: RoutineAction) -> Result<(), Box<dyn std::error::Error>> {
    let (config, mut store) = load_store()?;

    match action {
        RoutineAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(store.catalog().list())?);
            } else if store.catalog().is_empty() {
                println!("No routines.");
            } else {
                for routine in store.catalog().list() {
                    println!(
                        "{}  {} [{}] {} min, {} tasks",
                        routine.id,
                        routine.name,
                        routine.icon,
                        routine.duration_minutes,
                        routine.tasks.len()
                    );
                }
            }
        }
        RoutineAction::Create {
            name,
            duration,
            icon,
            tasks,
        } => {
            let draft = RoutineDraft {
                name,
                duration: duration
                    .unwrap_or_else(|| config.routines.default_duration_minutes.to_string()),
                icon: icon.unwrap_or(config.routines.default_icon),
                tasks,
            };
            let event = store.create_routine(draft)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
            if let Event::RoutineCreated { routine_id, .. } = &event {
                if let Some(created) = store.catalog().get(routine_id) {
                    println!("{}", serde_json::to_string_pretty(created)?);
                }
            }
        }
        RoutineAction::Run { id, tick_ms } => {
            let template = store
                .catalog()
                .get(&id)
                .cloned()
                .ok_or_else(|| format!("Routine not found: {id}"))?;
            let interval = tick_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| config.tick_interval());
            if interval.is_zero() {
                return Err("tick interval must be greater than zero".into());
            }

            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            runtime.block_on(drive(template, interval))?;
        }
    }
    Ok(())
}

/// A line typed while a run is active.
#[derive(Debug, PartialEq, Eq)]
enum RunCommand {
    Toggle(String),
    Status,
    Stop,
}

impl RunCommand {
    fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        match (parts.next()?, parts.next()) {
            ("toggle" | "t", Some(id)) => Some(RunCommand::Toggle(id.to_string())),
            ("status" | "s", None) => Some(RunCommand::Status),
            ("stop" | "q", None) => Some(RunCommand::Stop),
            _ => None,
        }
    }
}

/// Forward stdin lines from a plain thread.
///
/// Blocking reads on tokio's pool cannot be cancelled and would hold runtime
/// shutdown until the next newline. This thread is detached instead, and the
/// process exits without waiting on it.
fn spawn_command_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

/// Own the run for as long as this view is alive. Leaving the function on
/// any path drops the driver, which cancels the pending tick.
async fn drive(template: RoutineTemplate, interval: Duration) -> Result<(), Box<dyn std::error::Error>> {
    let mut driver = RunDriver::new(interval);
    let started = driver
        .start(&template)
        .ok_or_else(|| format!("Routine could not be started: {}", template.id))?;
    println!("{}", serde_json::to_string(&started)?);
    print_view(&driver)?;

    let mut commands = spawn_command_reader();
    let mut stdin_open = true;

    while driver.state() == RunState::Running {
        tokio::select! {
            tick = driver.next_tick() => {
                let Some(event) = tick else { break };
                if event.is_terminal() {
                    println!("{}", serde_json::to_string(&event)?);
                } else {
                    print_view(&driver)?;
                }
            }
            line = commands.recv(), if stdin_open => {
                let Some(line) = line else {
                    tracing::debug!("stdin closed, run continues");
                    stdin_open = false;
                    continue;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match RunCommand::parse(&line) {
                    Some(RunCommand::Toggle(task_id)) => match driver.toggle_task(&task_id) {
                        Some(event) => {
                            println!("{}", serde_json::to_string(&event)?);
                            print_view(&driver)?;
                        }
                        None => eprintln!("No task with id '{task_id}'"),
                    },
                    Some(RunCommand::Status) => {
                        println!("{}", serde_json::to_string(&driver.snapshot())?);
                    }
                    Some(RunCommand::Stop) => {
                        if let Some(event) = driver.stop() {
                            println!("{}", serde_json::to_string(&event)?);
                        }
                    }
                    None => eprintln!("Unknown command: {} (try: toggle <task-id>, status, stop)", line.trim()),
                }
            }
        }
    }
    Ok(())
}

fn print_view(driver: &RunDriver) -> Result<(), serde_json::Error> {
    if let Some(view) = driver.view() {
        println!("{}", serde_json::to_string(&view)?);
    }
    Ok(())
}
