use std::collections::BTreeMap;
use std::process::Command;

use marks_core::error::{Error, LaunchError};
use marks_ops::Opener;

use crate::config::Config;

const PLACEHOLDER_OPEN: &str = "{{";
const PLACEHOLDER_CLOSE: &str = "}}";

/// Launches a url through the configured command, e.g. `open -a firefox <url>`.
pub(crate) struct CommandOpener {
    command: String,
    templates: BTreeMap<String, String>,
}

impl CommandOpener {
    pub(crate) fn new(config: &Config) -> Self {
        Self {
            command: config.open_command.clone(),
            templates: config.open_args.clone(),
        }
    }

    /// The argument vector for `browser`, with `{{url}}` replaced in every word.
    pub(crate) fn arguments(&self, url: &str, browser: &str) -> Result<Vec<String>, Error> {
        let template = self
            .templates
            .get(browser)
            .ok_or_else(|| LaunchError::UnsupportedBrowser(browser.to_string()))?;
        let words = shell_words::split(template).map_err(|e| LaunchError::Arguments {
            args: template.clone(),
            reason: e.to_string(),
        })?;
        words
            .iter()
            .map(|w| interpolate(w, url).map_err(|reason| template_error(template, reason)))
            .collect()
    }
}

fn template_error(template: &str, reason: &'static str) -> Error {
    LaunchError::Template {
        template: template.to_string(),
        reason,
    }
    .into()
}

/// Replace each `{{url}}` in `word`; the older `{{.Url}}` spelling also works.
fn interpolate(word: &str, url: &str) -> Result<String, &'static str> {
    let mut out = String::with_capacity(word.len() + url.len());
    let mut rest = word;
    while let Some(start) = rest.find(PLACEHOLDER_OPEN) {
        out.push_str(&rest[..start]);
        let after = &rest[start + PLACEHOLDER_OPEN.len()..];
        let Some(end) = after.find(PLACEHOLDER_CLOSE) else {
            return Err("unclosed placeholder");
        };
        match after[..end].trim() {
            "url" | ".Url" => out.push_str(url),
            _ => return Err("unknown placeholder"),
        }
        rest = &after[end + PLACEHOLDER_CLOSE.len()..];
    }
    out.push_str(rest);
    Ok(out)
}

impl Opener for CommandOpener {
    fn open(&self, url: &str, browser: &str) -> Result<(), Error> {
        let args = self.arguments(url, browser)?;
        tracing::debug!(command = %self.command, ?args, "launching browser");

        let output = Command::new(&self.command).args(&args).output()?;
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        tracing::info!(output = %combined.trim_end(), "open output");

        if !output.status.success() {
            return Err(LaunchError::Failed {
                command: self.command.clone(),
                status: output.status.to_string(),
                output: combined.trim_end().to_string(),
            }
            .into());
        }
        Ok(())
    }
}
