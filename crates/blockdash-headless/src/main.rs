//! Headless driver: runs a level for a fixed number of ticks and logs the
//! events, or converts legacy level files to the tagged format.
//!
//! ```text
//! blockdash-headless [levels.json] [--level=N] [--ticks=N] [--hold-jump]
//! blockdash-headless convert <in.json> <out.json>
//! ```

use tracing_subscriber::EnvFilter;

use blockdash_core::game_trait::{ArcadeGame, GameConfig};
use blockdash_core::input::{Action, InputState};
use blockdash_core::level::LevelSet;
use blockdash_runner::DashRunner;

#[derive(Debug, Clone, PartialEq)]
struct RunOptions {
    level_file: Option<String>,
    level: usize,
    ticks: usize,
    hold_jump: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            level_file: None,
            level: 0,
            ticks: 600,
            hold_jump: false,
        }
    }
}

fn parse_run_options(args: &[String]) -> RunOptions {
    let mut opts = RunOptions::default();
    for arg in args {
        if let Some(v) = arg.strip_prefix("--level=") {
            opts.level = v.parse().ok().unwrap_or(0);
        } else if let Some(v) = arg.strip_prefix("--ticks=") {
            opts.ticks = v.parse().ok().unwrap_or(600);
        } else if arg == "--hold-jump" {
            opts.hold_jump = true;
        } else if !arg.starts_with("--") {
            opts.level_file = Some(arg.clone());
        }
    }
    opts
}

/// Stamp `"object": "Block"` onto legacy entries that carry no tag. Returns
/// the rewritten JSON and how many entries were stamped.
fn convert_legacy(text: &str) -> Result<(String, usize), serde_json::Error> {
    let mut levels: serde_json::Value = serde_json::from_str(text)?;
    let mut stamped = 0;
    if let Some(levels) = levels.as_array_mut() {
        for level in levels.iter_mut() {
            let Some(entries) = level.as_array_mut() else {
                continue;
            };
            for entry in entries.iter_mut() {
                if let Some(fields) = entry.as_object_mut() {
                    if !fields.contains_key("object") {
                        fields.insert("object".to_string(), serde_json::Value::from("Block"));
                        stamped += 1;
                    }
                }
            }
        }
    }
    Ok((serde_json::to_string_pretty(&levels)?, stamped))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.first().map(String::as_str) == Some("convert") {
        let (input, output) = match (args.get(1), args.get(2)) {
            (Some(i), Some(o)) => (i.clone(), o.clone()),
            _ => {
                eprintln!("Usage: blockdash-headless convert <in.json> <out.json>");
                std::process::exit(2);
            },
        };
        let text = std::fs::read_to_string(&input).unwrap_or_else(|e| {
            eprintln!("Failed to read {input}: {e}");
            std::process::exit(1);
        });
        let (converted, stamped) = match convert_legacy(&text) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Failed to parse {input}: {e}");
                std::process::exit(1);
            },
        };
        if let Err(e) = std::fs::write(&output, converted) {
            eprintln!("Failed to write {output}: {e}");
            std::process::exit(1);
        }
        println!("Stamped {stamped} legacy entries; wrote {output}");
        return;
    }

    let opts = parse_run_options(&args);

    let levels = match &opts.level_file {
        Some(path) => {
            let text = std::fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Failed to read {path}: {e}");
                std::process::exit(1);
            });
            LevelSet::from_json_str(&text).unwrap_or_else(|e| {
                eprintln!("Failed to parse {path}: {e}");
                std::process::exit(1);
            })
        },
        None => blockdash_runner::levels::demo_levels(),
    };

    let mut game = DashRunner::new();
    game.init(&levels, &GameConfig::default());
    if !game.load_level(opts.level) {
        eprintln!(
            "No level {} in the set ({} available)",
            opts.level,
            levels.len()
        );
        std::process::exit(1);
    }

    let meta = game.metadata();
    tracing::info!(
        "Running {} level {} for {} ticks",
        meta.name,
        opts.level,
        opts.ticks
    );

    let mut input = InputState::new();
    input.set_held(Action::Jump, opts.hold_jump);

    for tick in 0..opts.ticks {
        for event in game.update(&input) {
            tracing::info!(tick, ?event);
        }
    }

    println!("Final score: {}", game.score());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn run_options_default_to_demo_levels() {
        let opts = parse_run_options(&[]);
        assert_eq!(opts, RunOptions::default());
        assert_eq!(opts.level_file, None);
        assert_eq!(opts.ticks, 600);
    }

    #[test]
    fn run_options_accept_file_and_flags() {
        let opts = parse_run_options(&args(&[
            "custom.json",
            "--level=2",
            "--ticks=120",
            "--hold-jump",
        ]));
        assert_eq!(opts.level_file.as_deref(), Some("custom.json"));
        assert_eq!(opts.level, 2);
        assert_eq!(opts.ticks, 120);
        assert!(opts.hold_jump);
    }

    #[test]
    fn run_options_fall_back_on_bad_numbers() {
        let opts = parse_run_options(&args(&["--level=two", "--ticks="]));
        assert_eq!(opts.level, 0);
        assert_eq!(opts.ticks, 600);
    }

    #[test]
    fn convert_stamps_only_tagless_entries() {
        let legacy =
            r#"[[{"x":1,"y":10},{"object":"Spike","x":2,"y":10}],[{"x":0,"y":0}]]"#;

        let (converted, stamped) = convert_legacy(legacy).unwrap();

        assert_eq!(stamped, 2);
        let set = LevelSet::from_json_str(&converted).unwrap();
        assert_eq!(set.get(0).unwrap()[0].object.as_deref(), Some("Block"));
        assert_eq!(set.get(0).unwrap()[1].object.as_deref(), Some("Spike"));
        assert_eq!(set.get(1).unwrap()[0].object.as_deref(), Some("Block"));
    }

    #[test]
    fn convert_preserves_entry_fields() {
        let (converted, _) = convert_legacy(r#"[[{"x":3,"y":10,"width":2}]]"#).unwrap();
        let set = LevelSet::from_json_str(&converted).unwrap();
        let entry = &set.get(0).unwrap()[0];
        assert_eq!((entry.x, entry.y, entry.width), (3, 10, 2));
    }

    #[test]
    fn convert_rejects_garbage() {
        assert!(convert_legacy("not json").is_err());
    }
}
