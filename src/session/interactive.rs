use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{
    caption::annotator::Compositor,
    catalog::photos::{ensure_output_dir, list_photos},
    catalog::timestamp::{TimestampSource, interactive_date},
    foundation::error::{AnnotateError, AnnotateResult},
    session::captions::{interactive_captions, output_name},
    session::prompt::{PhotoFields, PhotoPrompt, PromptAction},
};

/// Inputs for [`run_interactive`].
#[derive(Clone, Debug)]
pub struct InteractiveOptions {
    /// Directory of photos to prompt for.
    pub images_dir: PathBuf,
    /// Directory captioned copies are written to.
    pub output_dir: PathBuf,
    /// File name of the first photo to prompt for; earlier photos are skipped.
    pub start: Option<String>,
    /// Fixed middle line of every right caption.
    pub signature: String,
}

/// Outcome of an interactive session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InteractiveReport {
    /// Written outputs.
    pub annotated: Vec<PathBuf>,
    /// Source photos removed on request.
    pub deleted: Vec<PathBuf>,
    /// Photos whose captioning failed, with the reason.
    pub failed: Vec<(PathBuf, String)>,
}

/// Resolve the caption fields and the defaults for the next photo.
///
/// Blank fields take the current default; blank defaults take the entered field, so the
/// first photo of a session seeds any default the operator left empty.
pub fn reconcile_fields(fields: PhotoFields, defaults: PhotoFields) -> (PhotoFields, PhotoFields) {
    let fields = fields.fill_blanks_from(&defaults);
    let defaults = defaults.fill_blanks_from(&fields);
    (fields, defaults)
}

/// Prompt for every photo in `opts.images_dir` and caption the saved ones.
///
/// Photos are numbered from 1 in file-name order, skipped photos included, and deletions
/// do not consume a number. A missing font aborts the session; other per-photo failures are
/// recorded and the session moves on.
pub fn run_interactive<C, P, T>(
    opts: &InteractiveOptions,
    compositor: &mut C,
    prompt: &mut P,
    timestamps: &mut T,
) -> AnnotateResult<InteractiveReport>
where
    C: Compositor + ?Sized,
    P: PhotoPrompt + ?Sized,
    T: TimestampSource + ?Sized,
{
    let photos = list_photos(&opts.images_dir)?;
    let start = match &opts.start {
        Some(name) => photos
            .iter()
            .position(|p| p.file_name().is_some_and(|f| f == name.as_str()))
            .ok_or_else(|| {
                AnnotateError::validation(format!(
                    "starting photo '{name}' not found in '{}'",
                    opts.images_dir.display()
                ))
            })?,
        None => 0,
    };
    ensure_output_dir(&opts.output_dir)?;

    let mut report = InteractiveReport::default();
    let mut defaults = PhotoFields::initial_defaults();
    let mut index = start + 1;

    for photo in &photos[start..] {
        let Some(reply) = prompt.ask(photo, &defaults)? else {
            tracing::info!("session ended by operator");
            break;
        };

        if reply.action == PromptAction::Delete {
            delete_photo(photo, &mut report);
            continue;
        }

        let (fields, next_defaults) = reconcile_fields(reply.fields, reply.defaults);
        defaults = next_defaults;

        let name = output_name(&fields.address, index);
        let output = opts.output_dir.join(&name);
        let date = interactive_date(timestamps.embedded_timestamp(photo));
        let (left, right) = interactive_captions(&name, &fields, &opts.signature, &date);

        match compositor.annotate_file(photo, &left, &right, &output) {
            Ok(()) => report.annotated.push(output),
            Err(err) if err.is_fatal() => return Err(err),
            Err(err) => {
                tracing::warn!(photo = %photo.display(), %err, "could not annotate photo");
                report.failed.push((photo.clone(), err.to_string()));
            }
        }
        index += 1;
    }

    Ok(report)
}

fn delete_photo(photo: &Path, report: &mut InteractiveReport) {
    let removed = std::fs::remove_file(photo)
        .with_context(|| format!("delete photo '{}'", photo.display()));
    match removed {
        Ok(()) => {
            tracing::info!(photo = %photo.display(), "deleted photo");
            report.deleted.push(photo.to_path_buf());
        }
        Err(err) => {
            tracing::warn!(photo = %photo.display(), err = %format!("{err:#}"), "could not delete photo");
            report.failed.push((photo.to_path_buf(), format!("{err:#}")));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/interactive.rs"]
mod tests;
