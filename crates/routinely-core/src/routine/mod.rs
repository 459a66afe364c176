mod catalog;
mod driver;
mod run;
mod template;
mod ticker;

pub use catalog::RoutineCatalog;
pub use driver::RunDriver;
pub use run::{RoutineRun, RunController, RunState, RunView};
pub use template::{parse_duration, RoutineDraft, RoutineIcon, RoutineTemplate, RoutineUpdate, Task};
pub use ticker::Ticker;
