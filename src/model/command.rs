use super::traits::ModelClient;
use anyhow::{anyhow, bail, Context};
use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;

/// Model client backed by an external CLI.
///
/// The prompt is written to the child's stdin and its trimmed stdout is the
/// response. `{model}` and `{max_tokens}` in `args` are substituted per call.
#[derive(Debug, Clone)]
pub struct CommandModel {
    model_name: String,
    program: String,
    args: Vec<String>,
}

impl CommandModel {
    pub fn new(model_name: impl Into<String>, program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            model_name: model_name.into(),
            program: program.into(),
            args,
        }
    }

    fn expand_args(&self, max_output_tokens: usize) -> Vec<String> {
        let max_tokens = max_output_tokens.to_string();
        self.args
            .iter()
            .map(|arg| {
                arg.replace("{model}", &self.model_name)
                    .replace("{max_tokens}", &max_tokens)
            })
            .collect()
    }
}

impl ModelClient for CommandModel {
    fn name(&self) -> &str {
        &self.model_name
    }

    fn query(&mut self, prompt: &str, max_output_tokens: usize) -> anyhow::Result<String> {
        let mut child = Command::new(&self.program)
            .args(self.expand_args(max_output_tokens))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to execute {}", self.program))?;

        // Written concurrently with the output drain below; both pipes are bounded.
        let writer = child.stdin.take().map(|mut stdin| {
            let prompt = prompt.as_bytes().to_vec();
            thread::spawn(move || stdin.write_all(&prompt))
        });

        let output = child
            .wait_with_output()
            .with_context(|| format!("Failed to wait for {}", self.program))?;
        let written = match writer {
            Some(writer) => writer
                .join()
                .map_err(|_| anyhow!("Prompt writer for {} panicked", self.program))?,
            None => Ok(()),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("{} returned error: {}", self.program, stderr.trim());
        }
        written.with_context(|| format!("Failed to write prompt to {} stdin", self.program))?;

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
