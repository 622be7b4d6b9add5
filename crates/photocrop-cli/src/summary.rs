use console::Style;
use photocrop_core::editor::{CropEditor, InteractionState};
use photocrop_core::geometry::{DeviceRect, RelativeRect};
use photocrop_core::pixels::CropRect;

use crate::commands::replay::Event;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    step: Style,
    disabled: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            step: Style::new().green(),
            disabled: Style::new().dim().yellow(),
        }
    }
}

fn fmt_relative(rel: &RelativeRect) -> String {
    format!(
        "({:.4}, {:.4}) - ({:.4}, {:.4})",
        rel.x1, rel.y1, rel.x2, rel.y2
    )
}

fn fmt_device(rect: &DeviceRect) -> String {
    format!(
        "({:.1}, {:.1}) - ({:.1}, {:.1})  {:.1}x{:.1}",
        rect.x1,
        rect.y1,
        rect.x2,
        rect.y2,
        rect.width(),
        rect.height()
    )
}

pub fn print_commit(step: usize, event: &Event, rel: RelativeRect) {
    let s = Styles::new();
    println!(
        "  {} {:<28}{}",
        s.step.apply_to(format!("#{step:<4}")),
        s.label.apply_to(format!("{event:?}")),
        s.value.apply_to(fmt_relative(&rel))
    );
}

pub fn print_final_state(editor: &CropEditor, commits: usize) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Final State"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(11)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Commits"),
        s.value.apply_to(commits)
    );

    let state = match editor.state() {
        InteractionState::Idle => "Idle".to_string(),
        InteractionState::Hover(zone) => format!("Hover ({zone:?})"),
        InteractionState::Active(drag) => format!("Active ({:?})", drag.operation()),
    };
    println!("  {:<14}{}", s.label.apply_to("State"), s.value.apply_to(state));

    if editor.is_enabled() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Cursor"),
            s.value.apply_to(format!("{:?}", editor.cursor_hint()))
        );
    } else {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Editing"),
            s.disabled.apply_to("disabled")
        );
    }

    match editor.relative_rect() {
        Some(rel) => println!(
            "  {:<14}{}",
            s.label.apply_to("Relative"),
            s.value.apply_to(fmt_relative(&rel))
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Relative"),
            s.disabled.apply_to("none")
        ),
    }
    if let Some(rect) = editor.device_rect() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Device"),
            s.value.apply_to(fmt_device(&rect))
        );
    }
    println!();
}

pub fn print_mapping(rel: &RelativeRect, device: &DeviceRect, pixels: Option<&CropRect>) {
    let s = Styles::new();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Relative"),
        s.value.apply_to(fmt_relative(rel))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Device"),
        s.value.apply_to(fmt_device(device))
    );
    if let Some(crop) = pixels {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Pixels"),
            s.value.apply_to(format!(
                "{},{}  {}x{}",
                crop.x, crop.y, crop.width, crop.height
            ))
        );
    }
}
