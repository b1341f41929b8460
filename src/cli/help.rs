use crate::cli::io;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::cli::ui::UiStyle;

pub fn overview_lines(registry: &CommandRegistry, style: &UiStyle) -> Vec<String> {
    let mut lines = vec![style.header("Available commands")];
    for entry in registry.list() {
        let name = if entry.aliases.is_empty() {
            entry.name.to_string()
        } else {
            format!("{} ({})", entry.name, entry.aliases.join(", "))
        };
        lines.push(format!("  {:<16} {}", name, entry.description));
    }
    lines.push("Use `help <command>` for details.".into());
    lines
}

pub fn command_lines(entry: &CommandEntry, style: &UiStyle) -> Vec<String> {
    vec![
        style.header(&format!("Help: {}", entry.name)),
        format!("  Description: {}", entry.description),
        format!("  Usage: {}", entry.usage),
    ]
}

pub fn print_overview(registry: &CommandRegistry, style: &UiStyle) {
    for line in overview_lines(registry, style) {
        let _ = io::println_text(&line);
    }
}

pub fn print_command(entry: &CommandEntry, style: &UiStyle) {
    for line in command_lines(entry, style) {
        let _ = io::println_text(&line);
    }
}
