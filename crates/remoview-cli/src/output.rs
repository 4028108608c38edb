use console::style;
use serde::Serialize;
use std::fmt::Display;
use tabled::{settings::Style, Table, Tabled};

/// Output format mode
#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Human,
    Json,
}

pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(json: bool) -> Self {
        Self {
            format: if json {
                OutputFormat::Json
            } else {
                OutputFormat::Human
            },
        }
    }

    pub fn success(&self, message: impl Display) {
        match self.format {
            OutputFormat::Human => {
                println!("{} {}", style("✓").green().bold(), message);
            }
            OutputFormat::Json => {
                emit_status("success", message);
            }
        }
    }

    pub fn info(&self, message: impl Display) {
        match self.format {
            OutputFormat::Human => {
                println!("{} {}", style("ℹ").blue().bold(), message);
            }
            OutputFormat::Json => {}
        }
    }

    pub fn warning(&self, message: impl Display) {
        match self.format {
            OutputFormat::Human => {
                eprintln!("{} {}", style("⚠").yellow().bold(), message);
            }
            OutputFormat::Json => {
                emit_status_stderr("warning", message);
            }
        }
    }

    pub fn error(&self, message: impl Display) {
        match self.format {
            OutputFormat::Human => {
                eprintln!("{} {}", style("✗").red().bold(), message);
            }
            OutputFormat::Json => {
                emit_status_stderr("error", message);
            }
        }
    }

    /// Render rows as a table. In JSON mode the rows are printed as an array.
    pub fn table<T: Tabled + Serialize>(&self, data: &[T]) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Human => {
                if data.is_empty() {
                    println!("{}", style("(no data)").dim());
                } else {
                    let mut table = Table::new(data);
                    table.with(Style::rounded());
                    println!("{}", table);
                }
            }
            OutputFormat::Json => {
                self.data(&data)?;
            }
        }
        Ok(())
    }

    pub fn data<T: Serialize>(&self, data: &T) -> anyhow::Result<()> {
        let json_str = serde_json::to_string_pretty(data)?;
        println!("{}", json_str);
        Ok(())
    }

    /// Print a command result wrapped in the `{"status": "success", "data": ...}` envelope
    pub fn result<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Human => {
                self.data(&data)?;
            }
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "status": "success",
                    "data": data,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
        }
        Ok(())
    }

    pub fn kv(&self, key: impl Display, value: impl Display) {
        if let OutputFormat::Human = self.format {
            println!("{}: {}", style(key).bold(), value);
        }
    }

    pub fn section(&self, title: impl Display) {
        if let OutputFormat::Human = self.format {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }
}

fn status_json(status: &str, message: impl Display) -> String {
    let output = serde_json::json!({
        "status": status,
        "message": message.to_string(),
    });
    // A json! map of strings always serializes
    serde_json::to_string_pretty(&output).unwrap_or_default()
}

fn emit_status(status: &str, message: impl Display) {
    println!("{}", status_json(status, message));
}

fn emit_status_stderr(status: &str, message: impl Display) {
    eprintln!("{}", status_json(status, message));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_json_shape() {
        let parsed: serde_json::Value =
            serde_json::from_str(&status_json("error", "boom")).unwrap();
        assert_eq!(parsed["status"], "error");
        assert_eq!(parsed["message"], "boom");
    }

    #[test]
    fn test_json_mode_flag() {
        assert!(OutputWriter::new(true).is_json());
        assert!(!OutputWriter::new(false).is_json());
    }
}
