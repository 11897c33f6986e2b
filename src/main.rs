//! Airport ground operations: the maintenance scheduler and taxiing
//! planner, run from a single CLI.

use argh::FromArgs;
use std::path::PathBuf;
use std::process::ExitCode;

use airport_csp::Scheduler;
use airport_taxi::{search, Heuristic};
use airport_utils::AirportError;

#[derive(FromArgs)]
#[argh(help_triggers("-h", "--help"))]
/// Ground maintenance scheduling and taxiing planner.
struct Opts {
    /// raise logging from `warn` to `debug` for this run
    #[argh(switch, short = 'v', long = "verbose")]
    verbose: bool,

    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    Schedule(CommandSchedule),
    Taxi(CommandTaxi),
}

#[derive(FromArgs)]
#[argh(subcommand, name = "schedule")]
/// Enumerate feasible maintenance-day assignments.
struct CommandSchedule {
    /// instance file, in the maintenance-instance text format
    #[argh(positional)]
    input: PathBuf,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "taxi")]
/// Plan a conflict-free, minimum-makespan taxiing movement.
struct CommandTaxi {
    /// map file, in the taxi-map text format
    #[argh(positional)]
    map: PathBuf,

    /// heuristic to use: 1 (Manhattan) or 2 (BFS distance)
    #[argh(positional)]
    heuristic: u8,
}

fn main() -> ExitCode {
    let opts: Opts = argh::from_env();

    env_logger::Builder::new()
        .format_timestamp(None)
        .filter_level(if opts.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .target(env_logger::Target::Stderr)
        .init();

    let result = match opts.command {
        Command::Schedule(cmd) => run_schedule(&cmd.input),
        Command::Taxi(cmd) => run_taxi(&cmd.map, cmd.heuristic),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("airport: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_schedule(input: &PathBuf) -> Result<(), AirportError> {
    let text = std::fs::read_to_string(input)?;
    let instance = airport_io::maintenance::read(input, &text)?;

    let scheduler = Scheduler::new(
        &instance.domain,
        instance.aircraft.clone(),
        instance.slots,
        instance.rows,
        instance.cols,
    );
    let solutions = scheduler.enumerate();

    let output_path = input.with_extension("csv");
    let output = airport_io::maintenance::write(&instance.aircraft, &instance.domain, &solutions);
    std::fs::write(&output_path, output)?;
    log::info!("wrote {}", output_path.display());
    Ok(())
}

fn run_taxi(map: &PathBuf, heuristic: u8) -> Result<(), AirportError> {
    let text = std::fs::read_to_string(map)?;
    let instance = airport_io::taxi::read(map, &text)?;

    let h = match heuristic {
        1 => Heuristic::manhattan(),
        2 => Heuristic::bfs_distance(&instance.grid, &instance.goals),
        other => {
            return Err(AirportError::Usage(format!(
                "unknown heuristic {other}, expected 1 or 2"
            )))
        }
    };

    let stem = format!("{}-{}", map.with_extension("").display(), heuristic);

    let result = search(&instance.grid, &instance.starts, &instance.goals, &h);
    match result {
        Some(result) => {
            std::fs::write(
                format!("{stem}.output"),
                airport_io::taxi::write_plan(&result.plan),
            )?;
            std::fs::write(
                format!("{stem}.stat"),
                airport_io::taxi::write_stats(&result),
            )?;
            log::info!("wrote {stem}.output and {stem}.stat");
        }
        None => {
            log::info!("no solution for {}", map.display());
        }
    }
    Ok(())
}
