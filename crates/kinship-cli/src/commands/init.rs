//! Init command implementation.

use crate::cli::InitArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the init command.
///
/// Writes default settings to `path`, recording `snapshot` as the default
/// family snapshot when one is given.
pub fn execute_init(
    args: InitArgs,
    path: &Path,
    snapshot: Option<String>,
    formatter: &Formatter,
) -> Result<()> {
    if path.exists() && !args.force {
        return Err(CliError::InvalidInput(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    let mut config = Config::default();
    config.settings.snapshot = snapshot;
    config.save_to(path)?;

    println!("{}", formatter.success(&format!("Wrote {}", path.display())));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    fn quiet() -> Formatter {
        Formatter::new(OutputFormat::Quiet, false)
    }

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kinship").join("config.toml");

        execute_init(InitArgs { force: false }, &path, Some("tree.json".into()), &quiet()).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.settings.snapshot.as_deref(), Some("tree.json"));
        assert!(config.resolver.resolve_in_laws);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[settings]\ncolor = false\n").unwrap();

        let result = execute_init(InitArgs { force: false }, &path, None, &quiet());
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert!(!Config::load_from(&path).unwrap().settings.color);

        execute_init(InitArgs { force: true }, &path, None, &quiet()).unwrap();
        assert!(Config::load_from(&path).unwrap().settings.color);
    }
}
