use std::{
    io::IsTerminal,
    sync::{OnceLock, RwLock},
};

use colored::{Color, Colorize};

use crate::cli::output::current_preferences;

#[derive(Clone)]
pub struct UiStyle {
    pub header_prefix: String,
    pub horizontal: char,
    pub use_color: bool,
    pub color_header: Option<Color>,
    pub color_highlight: Option<Color>,
    pub color_today: Option<Color>,
}

static STYLE: OnceLock<RwLock<UiStyle>> = OnceLock::new();

pub fn style() -> UiStyle {
    STYLE
        .get_or_init(|| RwLock::new(UiStyle::detect()))
        .read()
        .map(|guard| guard.clone())
        .unwrap_or_else(|_| UiStyle::plain())
}

pub fn refresh_style() {
    if let Some(lock) = STYLE.get() {
        if let Ok(mut guard) = lock.write() {
            *guard = UiStyle::detect();
        }
    } else {
        let _ = STYLE.set(RwLock::new(UiStyle::detect()));
    }
}

impl UiStyle {
    fn detect() -> Self {
        let prefs = current_preferences();
        let stdout_tty = std::io::stdout().is_terminal();
        let no_color = std::env::var_os("NO_COLOR").is_some();
        if !(stdout_tty && prefs.color_enabled && !no_color) {
            return Self::plain();
        }
        Self {
            header_prefix: "⮞ ".into(),
            horizontal: '─',
            use_color: true,
            color_header: Some(Color::BrightBlue),
            color_highlight: Some(Color::Cyan),
            color_today: Some(Color::Green),
        }
    }

    /// Colourless ASCII style used for scripts, pipes and tests.
    pub fn plain() -> Self {
        Self {
            header_prefix: "> ".into(),
            horizontal: '-',
            use_color: false,
            color_header: None,
            color_highlight: None,
            color_today: None,
        }
    }

    pub fn horizontal_line(&self, width: usize) -> String {
        self.horizontal.to_string().repeat(width.max(24))
    }

    pub fn header(&self, title: &str) -> String {
        let prefixed = format!("{}{}", self.header_prefix, title);
        paint(&prefixed, self.use_color, self.color_header)
    }

    pub fn highlight(&self, text: &str) -> String {
        paint(text, self.use_color, self.color_highlight)
    }

    pub fn today(&self, text: &str) -> String {
        paint(text, self.use_color, self.color_today)
    }
}

fn paint(text: &str, use_color: bool, color: Option<Color>) -> String {
    if !use_color {
        return text.to_string();
    }
    match color {
        Some(color) => text.color(color).bold().to_string(),
        None => text.bold().to_string(),
    }
}
