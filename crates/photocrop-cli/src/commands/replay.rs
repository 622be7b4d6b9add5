use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use photocrop_core::config::EditorConfig;
use photocrop_core::editor::CropEditor;
use photocrop_core::geometry::{PhotoFrame, Point, RelativeRect};
use serde::Deserialize;
use tracing::info;

use crate::summary;

#[derive(Args)]
pub struct ReplayArgs {
    /// Session script (TOML)
    pub script: PathBuf,
}

/// A recorded editing session: optional config and stored region, then the
/// events in the order the host delivered them.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Script {
    pub region: Option<RelativeRect>,
    pub config: EditorConfig,
    pub events: Vec<Event>,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Event {
    Frame {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Down {
        x: f64,
        y: f64,
    },
    Move {
        x: f64,
        y: f64,
    },
    Up {
        x: f64,
        y: f64,
    },
    Leave,
    Load {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    Enabled {
        value: bool,
    },
}

pub fn parse_script(text: &str) -> Result<Script> {
    let script: Script = toml::from_str(text)?;
    script.config.validate()?;
    Ok(script)
}

pub fn build_editor(script: &Script) -> Result<CropEditor> {
    let editor = match script.region {
        Some(region) => CropEditor::with_region(script.config.clone(), region)?,
        None => CropEditor::new(script.config.clone())?,
    };
    Ok(editor)
}

pub fn apply(editor: &mut CropEditor, event: Event) {
    match event {
        Event::Frame {
            x,
            y,
            width,
            height,
        } => editor.set_frame(PhotoFrame::new(x, y, width, height)),
        Event::Down { x, y } => editor.pointer_down(Point::new(x, y)),
        Event::Move { x, y } => editor.pointer_move(Point::new(x, y)),
        Event::Up { x, y } => editor.pointer_up(Point::new(x, y)),
        Event::Leave => editor.pointer_leave(),
        Event::Load { x1, y1, x2, y2 } => {
            editor.load_relative_rect(RelativeRect::new(x1, y1, x2, y2))
        }
        Event::Enabled { value } => editor.set_enabled(value),
    }
}

pub fn run(args: &ReplayArgs) -> Result<()> {
    let text = std::fs::read_to_string(&args.script)
        .with_context(|| format!("Failed to read script {}", args.script.display()))?;
    let script = parse_script(&text)
        .with_context(|| format!("Invalid script {}", args.script.display()))?;

    info!(events = script.events.len(), "Replaying session");

    let mut editor = build_editor(&script)?;
    let mut commits = 0;
    for (step, event) in script.events.iter().enumerate() {
        apply(&mut editor, *event);
        if let Some(rel) = editor.consume_commit() {
            commits += 1;
            summary::print_commit(step + 1, event, rel);
        }
    }

    summary::print_final_state(&editor, commits);
    Ok(())
}
