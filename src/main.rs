use footprint::bridge::{MemoryUsagePlugin, MethodCall};
use footprint::tasks::{InvokeMethodTask, Task};
use footprint::ui::cli::drivers::InquireDriver;
use footprint::ui::cli::wizard::prompt_choice;
use footprint::ui::types::build::build_task;
use footprint::ui::types::choices::TaskChoice;
use log::error;
use std::env;
use std::io;

pub fn main() {
    let exit_code = main_inner();
    std::process::exit(exit_code);
}

fn main_inner() -> i32 {
    env_logger::init();

    let task: Box<dyn Task> = match env::args().nth(1) {
        Some(arg) if arg == "--help" || arg == "-h" => {
            println!("{}", help());
            return 0;
        }
        Some(arg) if arg == "--version" || arg == "-V" => {
            println!("footprint {}", env!("CARGO_PKG_VERSION"));
            return 0;
        }
        Some(method) => Box::new(InvokeMethodTask::new(
            MemoryUsagePlugin::new(),
            MethodCall::new(method),
        )),
        None => match interactive_task() {
            Ok(task) => task,
            Err(e) => {
                error!("{e:#}");
                eprintln!("✗ {e:#}");
                return 1;
            }
        },
    };

    run(task)
}

fn interactive_task() -> anyhow::Result<Box<dyn Task>> {
    let choice: TaskChoice = prompt_choice(&InquireDriver)?;
    Ok(build_task(choice)?)
}

fn run(mut task: Box<dyn Task>) -> i32 {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match task.run(&mut out) {
        Ok(status) => status.exit_code(),
        Err(e) => {
            error!("{e:#}");
            eprintln!("✗ {e:#}");
            1
        }
    }
}

fn help() -> &'static str {
    r#"
    footprint [METHOD]

    With METHOD, sends one call over the com.example/memory_usage bridge and
    prints the JSON answer. `getMemoryUsage` answers the process's physical
    footprint in megabytes (-1 if the query failed); any other method answers
    not-implemented and exits with status 2.

    Without arguments, starts an interactive prompt.

    RUST_LOG=debug enables diagnostic logging on stderr.
    "#
}
