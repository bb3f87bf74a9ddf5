#![deny(unsafe_code)]

mod common;
mod config;
mod editor;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::Level as TraceLevel;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use crate::config::{ConfigPaths, ConfigStore, EditorSettings, PathOverrides, Preset};
use crate::editor::EditorSession;

#[derive(Parser)]
#[command(name = "hotkey-editor")]
#[command(version)]
#[command(about = "MotionBuilder hotkey and action script editor", long_about = None)]
struct Cli {
    /// Directory holding the host's vendor presets (MotionBuilder.txt, Maya.txt, ...)
    #[arg(long, global = true)]
    presets_dir: Option<PathBuf>,

    /// Directory holding the active customHotkeys.txt
    #[arg(long, global = true)]
    keyboard_dir: Option<PathBuf>,

    /// Directory holding ActionScript.txt
    #[arg(long, global = true)]
    scripts_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the desktop editor (default)
    Gui,
    /// Print hotkey entries and script bindings
    List {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Assign a key chord to an action and save (omit CHORD to clear it)
    Set { action: String, chord: Option<String> },
    /// Set the script path of a slot and save (omit PATH to clear it)
    Bind {
        #[arg(value_parser = clap::value_parser!(u8).range(1..=12))]
        slot: u8,
        path: Option<String>,
    },
    /// Replace the active hotkeys with a vendor preset
    Reset { preset: Preset },
    /// List vendor presets and whether their files are present
    Presets,
    /// Open the online documentation
    Docs,
}

impl Cli {
    fn path_overrides(&self) -> PathOverrides {
        PathOverrides {
            presets_dir: self.presets_dir.clone(),
            keyboard_dir: self.keyboard_dir.clone(),
            scripts_dir: self.scripts_dir.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so `list --json` output stays clean
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if cli.debug {
            TraceLevel::DEBUG
        } else {
            TraceLevel::INFO
        })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let settings = EditorSettings::load().context("Failed to load editor settings")?;
    let paths = ConfigPaths::resolve(&EditorSettings::app_dir(), &settings, cli.path_overrides());
    info!(
        presets = %paths.presets_dir.display(),
        keyboard = %paths.keyboard_dir.display(),
        scripts = %paths.scripts_dir.display(),
        "Resolved configuration directories"
    );

    match cli.command.unwrap_or(Command::Gui) {
        Command::Gui => {
            let session = EditorSession::open(ConfigStore::new(paths))?;
            editor::run_editor(session, settings)
        }
        Command::List { json } => {
            let session = EditorSession::open(ConfigStore::new(paths))?;
            print_config(&session, json)
        }
        Command::Set { action, chord } => {
            let mut session = EditorSession::open(ConfigStore::new(paths))?;
            if !session
                .config
                .set_key(&action, chord.as_deref().unwrap_or_default())
            {
                bail!("No hotkey entry named '{action}'");
            }
            session.save_changes()
        }
        Command::Bind { slot, path } => {
            let mut session = EditorSession::open(ConfigStore::new(paths))?;
            if !session
                .config
                .set_script_path(slot, path.as_deref().unwrap_or_default())
            {
                bail!("No action.global.script{slot} entry in the hotkey file");
            }
            session.save_changes()
        }
        Command::Reset { preset } => {
            let mut session = EditorSession::open(ConfigStore::new(paths))?;
            session.reset_to_preset(preset)?;
            println!("Hotkeys reset to {preset}");
            Ok(())
        }
        Command::Presets => {
            let store = ConfigStore::new(paths);
            let resetter = store.resetter();
            for preset in Preset::ALL {
                let status = if resetter.is_available(preset) {
                    "available"
                } else {
                    "missing"
                };
                println!("{:<24} {:<28} {}", preset.menu_label(), preset.file_name(), status);
            }
            Ok(())
        }
        Command::Docs => {
            editor::open_documentation();
            Ok(())
        }
    }
}

fn print_config(session: &EditorSession, json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(&session.config)
            .context("Failed to serialize hotkey configuration")?;
        println!("{out}");
        return Ok(());
    }

    println!("{}", session.store().paths().display_hotkey_file());
    println!();
    println!("{:<48} Key Combination", "Action");
    for entry in &session.config.entries {
        if entry.is_blank() {
            println!();
            continue;
        }
        println!("{:<48} {}", entry.action, entry.key_combination);
    }

    println!();
    println!("{:<12} Path to Script", "Script");
    for binding in &session.config.bindings {
        match binding.path {
            Some(_) => println!("{:<12} {}", binding.name, binding.path_text()),
            None => println!("{:<12} <not set>", binding.name),
        }
    }
    Ok(())
}
