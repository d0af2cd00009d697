use std::fmt;

use colored::Colorize;

/// One piece of command output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Success(String),
    Error(String),
    Table(String),
}

impl Line {
    pub fn is_error(&self) -> bool {
        matches!(self, Line::Error(_))
    }

    pub fn print(&self) {
        match self {
            Line::Success(_) => println!("{}", self.to_string().green()),
            Line::Error(_) => println!("{}", self.to_string().red()),
            Line::Table(table) => println!("{}", table),
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Success(msg) => write!(f, "SUCCESS: {}", msg),
            Line::Error(msg) => write!(f, "ERROR: {}", msg),
            Line::Table(table) => f.write_str(table),
        }
    }
}

impl From<crate::error::CommandError> for Line {
    fn from(err: crate::error::CommandError) -> Self {
        Line::Error(err.to_string())
    }
}

const SIZE_UNITS: [&str; 6] = ["bytes", "KB", "MB", "GB", "TB", "PB"];

/// Human readable byte count, 1024 based with two decimals.
pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} {}", bytes, SIZE_UNITS[0]);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, SIZE_UNITS[unit])
}
