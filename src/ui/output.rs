use crate::copier::RunSummary;
use crate::error::{ExtOrgError, UserFriendlyError};
use crate::scanner::tree_scanner::format_bytes;
use console::{style, Emoji, Term};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Human,
    Json,
    Plain,
}

impl OutputMode {
    pub fn from_string(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputMode::Json,
            "plain" => OutputMode::Plain,
            _ => OutputMode::Human,
        }
    }
}

// Emojis with text fallbacks
static CHECKMARK: Emoji = Emoji("✅ ", "✓ ");
static CROSS: Emoji = Emoji("❌ ", "✗ ");
static INFO: Emoji = Emoji("ℹ️  ", "i ");
static WARNING: Emoji = Emoji("⚠️  ", "! ");
static ROCKET: Emoji = Emoji("🚀 ", "> ");

enum MessageType {
    Success,
    Error,
    Warning,
    Info,
}

/// The single reporting collaborator for a run. Constructed once at startup
/// and injected wherever output happens; nothing else in the crate prints.
pub struct OutputFormatter {
    #[allow(dead_code)]
    term: Term,
    mode: OutputMode,
    use_colors: bool,
    verbose_level: u8,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let term = Term::stdout();
        let use_colors = match mode {
            OutputMode::Human => term.features().colors_supported() && !quiet,
            _ => false,
        };

        Self {
            term,
            mode,
            use_colors,
            verbose_level: if quiet { 0 } else { verbose },
            quiet,
        }
    }

    pub fn success(&self, message: &str) {
        match self.mode {
            OutputMode::Human => self.print_human_message(MessageType::Success, message),
            OutputMode::Json => self.print_json_message("success", message),
            OutputMode::Plain => println!("SUCCESS: {}", message),
        }
    }

    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Human => self.print_human_message(MessageType::Error, message),
            OutputMode::Json => self.print_json_message("error", message),
            OutputMode::Plain => eprintln!("ERROR: {}", message),
        }
    }

    pub fn warning(&self, message: &str) {
        if self.quiet {
            return;
        }
        match self.mode {
            OutputMode::Human => self.print_human_message(MessageType::Warning, message),
            OutputMode::Json => self.print_json_message("warning", message),
            OutputMode::Plain => println!("WARNING: {}", message),
        }
    }

    pub fn info(&self, message: &str) {
        if self.quiet {
            return;
        }
        match self.mode {
            OutputMode::Human => self.print_human_message(MessageType::Info, message),
            OutputMode::Json => self.print_json_message("info", message),
            OutputMode::Plain => println!("INFO: {}", message),
        }
    }

    pub fn debug(&self, message: &str) {
        if self.verbose_level < 1 {
            return;
        }
        match self.mode {
            OutputMode::Human => {
                if self.use_colors {
                    println!("  {}", style(message).dim());
                } else {
                    println!("  DEBUG: {}", message);
                }
            }
            OutputMode::Json => self.print_json_message("debug", message),
            OutputMode::Plain => println!("DEBUG: {}", message),
        }
    }

    pub fn start_operation(&self, operation: &str) {
        if self.quiet {
            return;
        }
        match self.mode {
            OutputMode::Human => {
                if self.use_colors {
                    println!("{}{}", ROCKET, style(operation).bold());
                } else {
                    println!("> {}", operation);
                }
            }
            OutputMode::Json => self.print_json_message("operation_start", operation),
            OutputMode::Plain => println!("STARTING: {}", operation),
        }
    }

    pub fn print_user_friendly_error(&self, error: &ExtOrgError) {
        let user_message = error.user_message();
        self.error(&user_message);

        if let Some(suggestion) = error.suggestion() {
            match self.mode {
                OutputMode::Human => {
                    println!();
                    if self.use_colors {
                        println!(
                            "{}{}",
                            INFO,
                            style(&format!("Suggestion: {}", suggestion)).cyan()
                        );
                    } else {
                        println!("Suggestion: {}", suggestion);
                    }
                }
                OutputMode::Json => {
                    self.print_json_object(&serde_json::json!({
                        "type": "suggestion",
                        "message": suggestion
                    }));
                }
                OutputMode::Plain => {
                    println!("SUGGESTION: {}", suggestion);
                }
            }
        }
    }

    pub fn print_run_summary(&self, summary: &RunSummary) {
        if self.quiet {
            return;
        }

        match self.mode {
            OutputMode::Human => self.print_human_summary(summary),
            OutputMode::Json => {
                let json_output =
                    serde_json::to_string_pretty(summary).unwrap_or_else(|_| "{}".to_string());
                println!("{}", json_output);
            }
            OutputMode::Plain => {
                println!(
                    "SUMMARY: total={} copied={} failed={} bytes={} duration={}",
                    summary.total_files,
                    summary.copied,
                    summary.failed,
                    summary.bytes_copied,
                    format_duration(summary.duration)
                );
            }
        }
    }

    fn print_human_summary(&self, summary: &RunSummary) {
        println!();
        if self.use_colors {
            println!("{}", style("Copy summary").bold());
        } else {
            println!("=== Copy summary ===");
        }

        println!("  Files discovered: {}", summary.total_files);
        println!(
            "  Copied: {} ({})",
            summary.copied,
            format_bytes(summary.bytes_copied)
        );
        if summary.failed > 0 {
            let line = format!("  Failed: {} (see error lines above)", summary.failed);
            if self.use_colors {
                println!("{}", style(line).red());
            } else {
                println!("{}", line);
            }
        }
        println!("  Duration: {}", format_duration(summary.duration));

        if !summary.files_by_extension.is_empty() {
            println!("  Files by extension:");
            let mut extensions: Vec<_> = summary.files_by_extension.iter().collect();
            extensions.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

            for (ext, count) in extensions {
                println!("    {}: {} files", ext, count);
            }
        }
    }

    fn print_human_message(&self, message_type: MessageType, message: &str) {
        match message_type {
            MessageType::Success => {
                if self.use_colors {
                    println!("{}{}", CHECKMARK, style(message).green());
                } else {
                    println!("{}{}", CHECKMARK, message);
                }
            }
            MessageType::Error => {
                if self.use_colors {
                    eprintln!("{}{}", CROSS, style(message).red());
                } else {
                    eprintln!("{}{}", CROSS, message);
                }
            }
            MessageType::Warning => {
                if self.use_colors {
                    println!("{}{}", WARNING, style(message).yellow());
                } else {
                    println!("{}{}", WARNING, message);
                }
            }
            MessageType::Info => {
                println!("{}{}", INFO, message);
            }
        }
    }

    fn print_json_message(&self, message_type: &str, message: &str) {
        self.print_json_object(&serde_json::json!({
            "type": message_type,
            "message": message,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }));
    }

    fn print_json_object(&self, value: &serde_json::Value) {
        println!("{}", value);
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    if total_secs >= 60 {
        format!("{}m {}s", total_secs / 60, total_secs % 60)
    } else if total_secs >= 1 {
        format!("{}.{}s", total_secs, duration.subsec_millis() / 100)
    } else {
        format!("{}ms", duration.as_millis())
    }
}
