use booking_desk::navigation::Console;
use std::collections::VecDeque;
use std::io;

/// Console that replays queued input lines and records everything shown.
///
/// Running out of input is an `UnexpectedEof` error, so a test that expects
/// more prompts than it scripted fails instead of hanging.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    prompts: Vec<String>,
    output: Vec<String>,
}

#[allow(dead_code)]
impl ScriptedConsole {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    /// Prompts shown, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Printed lines, in order.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Prompts and printed lines as one transcript.
    pub fn transcript(&self) -> String {
        let mut all = self.prompts.clone();
        all.extend(self.output.iter().cloned());
        all.join("\n")
    }

    /// Whether any printed line contains `needle`.
    pub fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }

    pub fn count_printed(&self, needle: &str) -> usize {
        self.output.iter().filter(|line| line.contains(needle)).count()
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.prompts.push(prompt.to_string());
        self.inputs
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        self.output.push(text.to_string());
        Ok(())
    }
}
