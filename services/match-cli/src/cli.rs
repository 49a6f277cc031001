use crate::commands::{run_rank, run_score, RankArgs, ScoreArgs};
use crate::demo::{run_demo, DemoArgs};
use crate::infra::engine_from_env;
use clap::{Parser, Subcommand};
use talent_match::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "talent-match",
    about = "Score and rank candidate profiles against job openings",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score one candidate profile against one job requirement
    Score(ScoreArgs),
    /// Rank a pool of candidate profiles for one job requirement
    Rank(RankArgs),
    /// Rank built-in sample candidates against a sample job opening
    Demo(DemoArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let engine = engine_from_env()?;

    match cli.command {
        Command::Score(args) => run_score(engine, args),
        Command::Rank(args) => run_rank(engine, args),
        Command::Demo(args) => run_demo(engine, args),
    }
}
