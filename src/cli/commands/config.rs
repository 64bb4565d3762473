use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

/// Editor from `--editor`, then $EDITOR / $VISUAL, then the platform default.
fn editor_candidates(explicit: Option<&str>) -> Vec<String> {
    let platform = if cfg!(target_os = "windows") {
        "notepad"
    } else {
        "nano"
    };

    let mut out: Vec<String> = explicit.into_iter().map(str::to_string).collect();
    out.extend(std::env::var("EDITOR").ok());
    out.extend(std::env::var("VISUAL").ok());
    out.push(platform.to_string());
    out.dedup();
    out
}

fn open_in_editor(path: &Path, explicit: Option<&str>) -> AppResult<()> {
    for editor in editor_candidates(explicit) {
        match Command::new(&editor).arg(path).status() {
            Ok(status) if status.success() => {
                success(format!("Configuration edited with '{}'", editor));
                return Ok(());
            }
            _ => warning(format!("Editor '{}' not available, trying the next one", editor)),
        }
    }

    Err(AppError::Config(format!(
        "no usable editor found for {}",
        path.display()
    )))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Configuration ({}):\n", path.display());
            println!("{}", cfg.to_yaml()?);
        }

        if *edit_config {
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "{} does not exist, run `rdoseplan init` first",
                    path.display()
                )));
            }
            open_in_editor(&path, editor.as_deref())?;
        }
    }

    Ok(())
}
