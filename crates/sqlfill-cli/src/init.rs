use crate::cli::InitArgs;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;

const TEMPLATE: &str = r#"version = "1"

[database]
user = "${MYSQL_USER}"
password = "${MYSQL_PASSWORD}"
host = "127.0.0.1"
port = 3306
database = "app"
"#;

pub fn run(args: InitArgs) -> anyhow::Result<()> {
    write_template(&args.config)?;
    println!("wrote {}", args.config.display());
    Ok(())
}

fn write_template(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                anyhow::anyhow!("failed to create directory {}: {e}", parent.display())
            })?;
        }
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => {
                anyhow::anyhow!("refusing to overwrite existing file: {}", path.display())
            }
            _ => anyhow::anyhow!("failed to create {}: {e}", path.display()),
        })?;
    file.write_all(TEMPLATE.as_bytes())
        .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote config template");
    Ok(())
}
