//! Timestamped status lines.

use chrono::{DateTime, Local, Timelike};
use colored::Colorize;
use std::fmt::Display;

/// `[HH:MM:SS]` with green brackets and a blue time.
pub fn timestamp_at(now: DateTime<Local>) -> String {
    let time = format!("{:02}:{:02}:{:02}", now.hour(), now.minute(), now.second());
    format!("{}{}{}", "[".green(), time.blue(), "]".green())
}

pub fn timestamp() -> String {
    timestamp_at(Local::now())
}

pub fn status(message: impl Display) {
    println!("{} {}", timestamp(), message);
}

pub fn config_missing() {
    status("Configuration file not found!");
}

pub fn saved(output: impl Display) {
    status(format!(
        "Styles extracted and saved to {}",
        output.to_string().yellow()
    ));
}

pub fn generated() {
    status("Styles generated successfully!".green());
}

pub fn watch_enabled() {
    status("-w flag detected. Using watch mode...");
}

pub fn file_changed(path: impl Display) {
    status(format!(
        "File {} changed. Regenerating styles...",
        path.to_string().yellow()
    ));
}

pub fn file_generated(path: impl Display) {
    status(format!(
        "Style for {} generated successfully!",
        path.to_string().yellow()
    ));
}
