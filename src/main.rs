mod batch;
mod board;
mod config;
mod error;
mod generate;
mod heuristic;
mod r#move;
mod report;
mod solver;


mod prelude;
use prelude::*;

use anyhow::Context;
use report::TextReport;

fn main() -> anyhow::Result<()> {
    let invocation = Invocation::parse(std::env::args().skip(1))?;
    simple_logger::SimpleLogger::new()
        .with_level(invocation.log_level())
        .init()?;

    match invocation.command {
        Command::Help => {
            println!("{}", USAGE);
            Ok(())
        }
        Command::Generate(config) => generate::run(&config),
        Command::Solve(config) => solve(&config),
    }
}

fn solve(config: &RunConfig) -> anyhow::Result<()> {
    let out = std::fs::File::create(&config.output)
        .with_context(|| format!("Unable to create {}", config.output.display()))?;
    let mut report = TextReport::new(std::io::BufWriter::new(out));

    log::info!(
        "Heuristic {}, time limit {:?}",
        config.search.heuristic.name(),
        config.search.time_limit
    );

    let solver = IdaStar::init(config.search.clone());
    let summary = batch::solve_file(&solver, &config.input, &mut report)?;

    log::info!(
        "Solved {} puzzles, results in {}",
        summary.solved,
        config.output.display()
    );
    Ok(())
}
