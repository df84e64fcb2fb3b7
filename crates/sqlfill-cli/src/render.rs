use crate::cli::RenderArgs;
use sqlfill::{FillError, Registry, StatementKind};

pub fn run(args: RenderArgs) -> anyhow::Result<()> {
    println!("{}", render_line(&args)?);
    Ok(())
}

pub fn run_kinds() -> anyhow::Result<()> {
    print!("{}", kinds_table());
    Ok(())
}

fn render_line(args: &RenderArgs) -> anyhow::Result<String> {
    let kind: StatementKind = args.kind.parse()?;
    match Registry::global().render(kind, &args.values) {
        Ok(sql) => Ok(sql),
        Err(err @ FillError::Arity { .. }) if args.lossy => {
            tracing::debug!(error = %err, "lossy render, printing empty line");
            Ok(String::new())
        }
        Err(err) => Err(err.into()),
    }
}

fn kinds_table() -> String {
    let mut out = String::new();
    for builder in Registry::global().iter() {
        out.push_str(&format!("{:<14}{}\n", builder.kind.name(), builder.arity));
    }
    out
}
