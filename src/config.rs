use crate::prelude::*;

use anyhow::Context;
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage:
  fifteen [--input PATH] [--output PATH] [--time-limit SECS] [--depth-limit N]
          [--heuristic manhattan|linear-conflict] [--verbose]
  fifteen generate COUNT [--seed SEED] [--output PATH] [--verbose]

Defaults: --input puzzles.txt --output solutions.txt --time-limit 180
          --depth-limit 80 --heuristic linear-conflict
`generate` writes COUNT random solvable puzzles to --output (default puzzles.txt).";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub time_limit: Duration,
    /// Bounds above this end the search as not found. 80 moves solve every
    /// solvable 4x4 board.
    pub depth_limit: u32,
    pub heuristic: HeuristicKind,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            time_limit: Duration::from_secs(180),
            depth_limit: 80,
            heuristic: HeuristicKind::LinearConflict,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub search: SearchConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            input: PathBuf::from("puzzles.txt"),
            output: PathBuf::from("solutions.txt"),
            search: SearchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    pub count: usize,
    pub seed: Option<u64>,
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Solve(RunConfig),
    Generate(GenerateConfig),
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub verbose: bool,
}

impl Invocation {
    /// Parses arguments, excluding the program name.
    pub fn parse(args: impl IntoIterator<Item = String>) -> anyhow::Result<Invocation> {
        let mut args = args.into_iter().peekable();
        let mut verbose = false;

        if args.peek().map(String::as_str) == Some("generate") {
            args.next();
            let count = args
                .next()
                .context("generate needs a puzzle count")?
                .parse::<usize>()
                .context("Invalid puzzle count")?;
            let mut config = GenerateConfig {
                count,
                seed: None,
                output: RunConfig::default().input,
            };

            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--seed" => config.seed = Some(value(&mut args, &arg)?.parse::<u64>()?),
                    "--output" => config.output = value(&mut args, &arg)?.into(),
                    "--verbose" | "-v" => verbose = true,
                    "--help" | "-h" => return Ok(Invocation::help()),
                    _ => anyhow::bail!("Unrecognized argument {}", arg),
                }
            }
            return Ok(Invocation {
                command: Command::Generate(config),
                verbose,
            });
        }

        let mut config = RunConfig::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--input" => config.input = value(&mut args, &arg)?.into(),
                "--output" => config.output = value(&mut args, &arg)?.into(),
                "--time-limit" => {
                    let secs: f64 = value(&mut args, &arg)?
                        .parse::<f64>()
                        .context("Invalid --time-limit")?;
                    config.search.time_limit = Duration::try_from_secs_f64(secs)
                        .context("--time-limit must be a non-negative number of seconds")?;
                }
                "--depth-limit" => {
                    config.search.depth_limit = value(&mut args, &arg)?
                        .parse::<u32>()
                        .context("Invalid --depth-limit")?
                }
                "--heuristic" => {
                    config.search.heuristic = value(&mut args, &arg)?.parse::<HeuristicKind>()?
                }
                "--verbose" | "-v" => verbose = true,
                "--help" | "-h" => return Ok(Invocation::help()),
                _ => anyhow::bail!("Unrecognized argument {}", arg),
            }
        }

        Ok(Invocation {
            command: Command::Solve(config),
            verbose,
        })
    }

    fn help() -> Invocation {
        Invocation {
            command: Command::Help,
            verbose: false,
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> anyhow::Result<String> {
    args.next()
        .ok_or_else(|| anyhow::anyhow!("{} needs a value", flag))
}
