use std::path::PathBuf;

use anyhow::{bail, Context};
use ovalkit::replay::{replay, Gesture};
use ovalkit::{init_logging, ControlConfig};

const USAGE: &str = "Usage: ovalkit <gesture.json> [--config <control.toml|control.json>]";

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    let mut gesture_path: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            "-V" | "--version" => {
                println!("ovalkit {} ({})", ovalkit::VERSION, ovalkit::BUILD_DATE);
                return Ok(());
            }
            "--config" => {
                let path = args.next().context("--config needs a path")?;
                config_path = Some(PathBuf::from(path));
            }
            _ if gesture_path.is_none() => gesture_path = Some(PathBuf::from(&arg)),
            other => bail!("unexpected argument '{other}'\n{USAGE}"),
        }
    }

    let Some(gesture_path) = gesture_path else {
        bail!("missing gesture file\n{USAGE}");
    };

    let config = match config_path {
        Some(path) => ControlConfig::load_from_file(&path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ControlConfig::default(),
    };

    let gesture = Gesture::from_file(&gesture_path)
        .with_context(|| format!("loading gesture {}", gesture_path.display()))?;

    let outcome = replay(&gesture, config)?;
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    Ok(())
}
