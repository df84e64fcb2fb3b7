use std::path::PathBuf;

pub const DEFAULT_CONFIG: &str = "sqlfill.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpTopic {
    Root,
    Render,
    Kinds,
    Dsn,
    Init,
}

#[derive(Debug, Clone)]
pub enum Command {
    Help(HelpTopic),
    Render(RenderArgs),
    Kinds,
    Dsn(DsnArgs),
    Init(InitArgs),
}

#[derive(Debug, Clone)]
pub struct RenderArgs {
    pub kind: String,
    pub values: Vec<String>,
    pub lossy: bool,
}

#[derive(Debug, Clone)]
pub struct DsnArgs {
    pub config: PathBuf,
}

#[derive(Debug, Clone)]
pub struct InitArgs {
    pub config: PathBuf,
}

pub fn parse_args(args: &[String]) -> anyhow::Result<Command> {
    let mut it = args.iter().skip(1);
    let Some(first) = it.next() else {
        return Ok(Command::Help(HelpTopic::Root));
    };

    match first.as_str() {
        "-h" | "--help" => Ok(Command::Help(HelpTopic::Root)),
        "render" => parse_render(it.map(|s| s.as_str())),
        "kinds" => parse_kinds(it.map(|s| s.as_str())),
        "dsn" => Ok(match parse_config_flag(it.map(|s| s.as_str()))? {
            Some(config) => Command::Dsn(DsnArgs { config }),
            None => Command::Help(HelpTopic::Dsn),
        }),
        "init" => Ok(match parse_config_flag(it.map(|s| s.as_str()))? {
            Some(config) => Command::Init(InitArgs { config }),
            None => Command::Help(HelpTopic::Init),
        }),
        _ => anyhow::bail!("unknown command: {first}"),
    }
}

fn parse_render<'a>(mut it: impl Iterator<Item = &'a str>) -> anyhow::Result<Command> {
    let mut kind: Option<String> = None;
    let mut values: Vec<String> = Vec::new();
    let mut lossy = false;

    while let Some(token) = it.next() {
        match token {
            "-h" | "--help" if kind.is_none() => return Ok(Command::Help(HelpTopic::Render)),
            "-h" | "--help" => push_positional(&mut kind, &mut values, token),
            "--lossy" => lossy = true,
            "--" => {
                // Everything after `--` is positional, even if it looks like a flag.
                for rest in it.by_ref() {
                    push_positional(&mut kind, &mut values, rest);
                }
            }
            other if other.starts_with("--") => anyhow::bail!("unknown argument: {other}"),
            other => push_positional(&mut kind, &mut values, other),
        }
    }

    let Some(kind) = kind else {
        anyhow::bail!("missing statement kind: expected `sqlfill render <KIND> [ARGS...]`");
    };

    Ok(Command::Render(RenderArgs {
        kind,
        values,
        lossy,
    }))
}

fn push_positional(kind: &mut Option<String>, values: &mut Vec<String>, token: &str) {
    if kind.is_none() {
        *kind = Some(token.to_string());
    } else {
        values.push(token.to_string());
    }
}

fn parse_kinds<'a>(it: impl Iterator<Item = &'a str>) -> anyhow::Result<Command> {
    for token in it {
        match token {
            "-h" | "--help" => return Ok(Command::Help(HelpTopic::Kinds)),
            other => anyhow::bail!("unknown argument: {other}"),
        }
    }
    Ok(Command::Kinds)
}

/// Parse `[--config <FILE>]`; `Ok(None)` means help was requested.
fn parse_config_flag<'a>(mut it: impl Iterator<Item = &'a str>) -> anyhow::Result<Option<PathBuf>> {
    let mut config = PathBuf::from(DEFAULT_CONFIG);

    while let Some(token) = it.next() {
        match token {
            "-h" | "--help" => return Ok(None),
            "--config" => {
                let Some(v) = it.next() else {
                    anyhow::bail!("--config requires a value");
                };
                config = PathBuf::from(v);
            }
            other => match other.strip_prefix("--config=") {
                Some(v) => config = PathBuf::from(v),
                None => anyhow::bail!("unknown argument: {other}"),
            },
        }
    }

    Ok(Some(config))
}

pub fn print_help(topic: HelpTopic) {
    match topic {
        HelpTopic::Root => {
            println!(
                "\
sqlfill - render MySQL statement templates from positional arguments

USAGE:
  sqlfill <COMMAND> [OPTIONS]

COMMANDS:
  render        Render one statement (SELECT, INSERT_INTO, AND, ...)
  kinds         List statement kinds and their argument counts
  dsn           Print the connection string from a config file
  init          Write a template config file

Run `sqlfill <command> --help` for more."
            );
        }
        HelpTopic::Render => {
            println!(
                "\
USAGE:
  sqlfill render <KIND> [ARGS...] [OPTIONS]

Arguments are spliced in verbatim; nothing is quoted or escaped.
Use `--` before arguments that start with `--`.
`-h` and `--help` only ask for help before the kind; after it they are values.

EXAMPLES:
  sqlfill render SELECT 'id, name' users 'id = 1'
  sqlfill render insert-into t 'a,b' '1,2' '3,4'

OPTIONS:
  --lossy               Print an empty line instead of failing on a wrong argument count
  -h, --help            Print help"
            );
        }
        HelpTopic::Kinds => {
            println!(
                "\
USAGE:
  sqlfill kinds

Lists every statement kind with its accepted argument count
(`5` exactly, `2..=3` inclusive range, `3..` at least)."
            );
        }
        HelpTopic::Dsn => {
            println!(
                "\
USAGE:
  sqlfill dsn [OPTIONS]

OPTIONS:
  --config <FILE>       Config file path (default: sqlfill.toml)
  -h, --help            Print help"
            );
        }
        HelpTopic::Init => {
            println!(
                "\
USAGE:
  sqlfill init [OPTIONS]

OPTIONS:
  --config <FILE>       Config file path to create (default: sqlfill.toml)
  -h, --help            Print help"
            );
        }
    }
}
