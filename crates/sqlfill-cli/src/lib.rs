mod cli;
mod config;
mod dsn;
mod init;
mod render;

/// `RUST_LOG` fallback. Library arity warnings stay hidden because the command
/// already reports the error itself.
pub const DEFAULT_LOG_FILTER: &str = "sqlfill=error";

pub fn run(args: Vec<String>) -> anyhow::Result<()> {
    let cmd = cli::parse_args(&args)?;
    tracing::debug!(command = ?cmd, "parsed command line");
    match cmd {
        cli::Command::Help(topic) => {
            cli::print_help(topic);
            Ok(())
        }
        cli::Command::Render(args) => render::run(args),
        cli::Command::Kinds => render::run_kinds(),
        cli::Command::Dsn(args) => dsn::run(args),
        cli::Command::Init(args) => init::run(args),
    }
}
