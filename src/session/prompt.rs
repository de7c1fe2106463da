use std::{
    io::{BufRead, Write},
    path::Path,
};

use anyhow::Context;

use crate::foundation::error::AnnotateResult;

/// Operator-entered caption fields for one photo.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PhotoFields {
    /// Site address; also names the output file.
    pub address: String,
    /// Location within the site.
    pub location: String,
    /// Condition comment.
    pub comment: String,
    /// Photographer name.
    pub photographer: String,
}

impl PhotoFields {
    /// Defaults offered for the first photo of a session.
    pub fn initial_defaults() -> Self {
        Self {
            comment: "General Condition".to_string(),
            ..Self::default()
        }
    }

    /// Replace every blank (whitespace-only) field with the matching field of `other`.
    pub fn fill_blanks_from(mut self, other: &PhotoFields) -> Self {
        fn fill(slot: &mut String, from: &str) {
            if slot.trim().is_empty() {
                *slot = from.to_string();
            }
        }
        fill(&mut self.address, &other.address);
        fill(&mut self.location, &other.location);
        fill(&mut self.comment, &other.comment);
        fill(&mut self.photographer, &other.photographer);
        self
    }
}

/// What the operator decided for a photo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptAction {
    /// Caption the photo with the entered fields.
    Save,
    /// Delete the source photo and move on.
    Delete,
}

/// Answer to one per-photo prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptReply {
    /// Values to caption this photo with.
    pub fields: PhotoFields,
    /// Defaults to offer for the next photo.
    pub defaults: PhotoFields,
    /// What to do with the photo.
    pub action: PromptAction,
}

/// Blocking per-photo form.
pub trait PhotoPrompt {
    /// Ask about `photo`, pre-filled with `defaults`. `Ok(None)` ends the session.
    fn ask(&mut self, photo: &Path, defaults: &PhotoFields) -> AnnotateResult<Option<PromptReply>>;
}

/// Line-oriented prompt on a reader/writer pair, normally stdin/stderr.
///
/// Each field shows its pre-filled value; an empty answer keeps it. The final action line
/// accepts `s`/`save` (default), `d`/`defaults` (save and adopt the entered values as the
/// new defaults), `x`/`delete` and `q`/`quit`. End of input quits.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    /// Prompt on `input`, echoing questions to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_answer(&mut self, label: &str, prefill: &str) -> AnnotateResult<Option<String>> {
        write!(self.output, "{label} [{prefill}]: ").context("write prompt")?;
        self.output.flush().context("flush prompt")?;

        let mut line = String::new();
        let n = self.input.read_line(&mut line).context("read answer")?;
        if n == 0 {
            return Ok(None);
        }
        let answer = line.trim_end_matches(['\r', '\n']);
        Ok(Some(if answer.trim().is_empty() {
            prefill.to_string()
        } else {
            answer.trim().to_string()
        }))
    }
}

impl<R: BufRead, W: Write> PhotoPrompt for TerminalPrompt<R, W> {
    fn ask(&mut self, photo: &Path, defaults: &PhotoFields) -> AnnotateResult<Option<PromptReply>> {
        let name = photo
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| photo.display().to_string());
        writeln!(self.output, "\nANNOTATING {name}:").context("write prompt")?;

        let mut fields = PhotoFields::default();
        for (label, prefill, slot) in [
            ("Address", &defaults.address, &mut fields.address),
            ("Location", &defaults.location, &mut fields.location),
            ("Comment", &defaults.comment, &mut fields.comment),
            ("Photographer", &defaults.photographer, &mut fields.photographer),
        ] {
            let Some(answer) = self.read_answer(label, prefill)? else {
                return Ok(None);
            };
            *slot = answer;
        }

        loop {
            let Some(action) = self.read_answer("Action (s/d/x/q)", "s")? else {
                return Ok(None);
            };
            let reply = match action.to_ascii_lowercase().as_str() {
                "s" | "save" => PromptReply {
                    fields,
                    defaults: defaults.clone(),
                    action: PromptAction::Save,
                },
                "d" | "defaults" => PromptReply {
                    defaults: fields.clone(),
                    fields,
                    action: PromptAction::Save,
                },
                "x" | "delete" => PromptReply {
                    fields,
                    defaults: defaults.clone(),
                    action: PromptAction::Delete,
                },
                "q" | "quit" => return Ok(None),
                other => {
                    writeln!(self.output, "unknown action '{other}'").context("write prompt")?;
                    continue;
                }
            };
            return Ok(Some(reply));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/prompt.rs"]
mod tests;
