#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use runlist::config::{RunConfig, parse_command_line};
use runlist::types::CommandSpec;

/// Builder for command-list file contents.
#[derive(Default)]
pub struct CommandListBuilder {
    lines: Vec<String>,
}

impl CommandListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn command(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn comment(mut self, text: &str) -> Self {
        self.lines.push(format!("# {text}"));
        self
    }

    pub fn blank(mut self) -> Self {
        self.lines.push(String::new());
        self
    }

    /// File text, newline-terminated.
    pub fn text(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }

    /// Parsed specs for the non-comment, non-blank lines.
    pub fn specs(&self) -> Vec<CommandSpec> {
        self.lines
            .iter()
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(|l| parse_command_line(l).expect("builder line should parse"))
            .collect()
    }

    /// Write into `dir/name` and return the path.
    pub fn write_to(&self, dir: &std::path::Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).expect("create command list");
        file.write_all(self.text().as_bytes())
            .expect("write command list");
        path
    }
}

/// Shorthand for a validated `RunConfig` with only the concurrency set.
pub fn config_with_concurrency(concurrency: usize) -> RunConfig {
    RunConfig::new(concurrency, false, false).expect("valid concurrency")
}
