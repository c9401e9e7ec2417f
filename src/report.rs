//! Console presentation of a `TrackingResult`.
//!
//! Pure string builders; the binary decides where they go.

use crate::config::Presentation;
use crate::pipeline::TrackingResult;
use colored::{Color, Colorize};

const BANNER: &[&str] = &[
    "╔═══════════════════════════════════════════════╗",
    "║         PHONE NUMBER LOCATION LOOKUP          ║",
    "║   approximate area from numbering-plan data   ║",
    "╚═══════════════════════════════════════════════╝",
];

fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        text.color(color).to_string()
    } else {
        text.to_string()
    }
}

/// Banner, unless quiet.
pub fn banner(p: &Presentation) -> Option<String> {
    if p.quiet {
        return None;
    }
    let mut out = String::new();
    for line in BANNER {
        out.push_str(&paint(line, Color::Cyan, p.color));
        out.push('\n');
    }
    Some(out)
}

/// Label/value rows shown in the result box.
pub fn summary_rows(result: &TrackingResult) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Phone Number", result.international.clone()),
        ("Location", result.attributes.region_description.clone()),
        ("Carrier", result.attributes.carrier_name.clone()),
    ];
    if let Some(t) = result.attributes.number_type {
        rows.push(("Type", t.to_string()));
    }
    if let Some(c) = result.coordinate {
        rows.push(("Latitude", format!("{:.6}", c.latitude)));
        rows.push(("Longitude", format!("{:.6}", c.longitude)));
    }
    if let Some(ref path) = result.map_file {
        rows.push(("Map File", path.display().to_string()));
    }
    rows.push((
        "Timestamp",
        result.generated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
    ));
    rows
}

/// The boxed result summary.
pub fn summary(result: &TrackingResult, color: bool) -> String {
    let rows = summary_rows(result);
    let label_width = rows.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
    let lines: Vec<String> = rows
        .iter()
        .map(|(label, value)| format!("{:<width$} : {}", label, value, width = label_width))
        .collect();

    let title = "TRACKING RESULTS";
    let width = lines
        .iter()
        .map(|l| l.chars().count())
        .chain(std::iter::once(title.len()))
        .max()
        .unwrap_or(0)
        + 2;

    let mut out = String::new();
    let border = "═".repeat(width);
    out.push_str(&paint(&format!("╔{}╗", border), Color::Green, color));
    out.push('\n');
    out.push_str(&paint(&format!("║{:^width$}║", title, width = width), Color::Green, color));
    out.push('\n');
    out.push_str(&paint(&format!("╠{}╣", border), Color::Green, color));
    out.push('\n');
    for line in &lines {
        let pad = width - 1 - line.chars().count();
        out.push_str(&paint(&format!("║ {}{}║", line, " ".repeat(pad)), Color::Green, color));
        out.push('\n');
    }
    out.push_str(&paint(&format!("╚{}╝", border), Color::Green, color));
    out.push('\n');
    out
}

pub fn warning(msg: &str, color: bool) -> String {
    paint(&format!("Warning: {}", msg), Color::Yellow, color)
}

pub fn error(msg: &str, color: bool) -> String {
    paint(&format!("Error: {}", msg), Color::Red, color)
}

pub fn map_saved(result: &TrackingResult, color: bool) -> Option<String> {
    result
        .map_file
        .as_ref()
        .map(|p| paint(&format!("Map saved: {}", p.display()), Color::Cyan, color))
}
