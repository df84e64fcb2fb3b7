use crate::cli::DsnArgs;
use crate::config::ProjectConfig;
use std::path::PathBuf;

pub fn run(args: DsnArgs) -> anyhow::Result<()> {
    println!("{}", resolve(args.config)?);
    Ok(())
}

fn resolve(config: PathBuf) -> anyhow::Result<String> {
    let project = ProjectConfig::load(config)?;
    project.file.database.to_dsn().map_err(|e| {
        anyhow::anyhow!(
            "failed to build data source from {}: {e}",
            project.config_path.display()
        )
    })
}
