use std::io::Write;

use merge_core::{ArtifactId, ErrorNotification, MergeViewModel, Phase, PreviewSurface, TokenRowView};
use merge_logging::{merge_debug, merge_warn};

/// Host-side presentation of the merge session.
pub trait Presenter: PreviewSurface {
    fn render(&mut self, view: &MergeViewModel);
    fn letters_generated(&mut self, artifact_ids: &[ArtifactId]);
    fn show_error(&mut self, notification: &ErrorNotification);
}

/// Writes the session to a pair of text streams. Re-projecting an unchanged
/// preview prints nothing, so projection can run after every render.
pub struct TerminalPresenter<O: Write, E: Write> {
    out: O,
    err: E,
    shown_body: Option<String>,
    shown_tokens: Vec<TokenRowView>,
}

impl<O: Write, E: Write> TerminalPresenter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self {
            out,
            err,
            shown_body: None,
            shown_tokens: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn into_streams(self) -> (O, E) {
        (self.out, self.err)
    }

    fn write_out(&mut self, text: &str) {
        if let Err(err) = writeln!(self.out, "{text}") {
            merge_warn!("Failed to write to output: {}", err);
        }
    }

    fn write_err(&mut self, text: &str) {
        if let Err(err) = writeln!(self.err, "{text}") {
            merge_warn!("Failed to write to error output: {}", err);
        }
    }
}

impl<O: Write, E: Write> PreviewSurface for TerminalPresenter<O, E> {
    fn show_preview_body(&mut self, body: &str) {
        if self.shown_body.as_deref() == Some(body) {
            return;
        }
        self.shown_body = Some(body.to_string());
        self.write_out("----- preview -----");
        self.write_out(body);
        self.write_out("-------------------");
    }
}

impl<O: Write, E: Write> Presenter for TerminalPresenter<O, E> {
    fn render(&mut self, view: &MergeViewModel) {
        merge_debug!(
            "Render phase={} delivery={} generate_enabled={}",
            phase_label(view.phase),
            view.delivery_mode.label(),
            view.generate_enabled
        );
        if view.tokens == self.shown_tokens || view.tokens.is_empty() {
            return;
        }
        self.shown_tokens = view.tokens.clone();
        let width = view
            .tokens
            .iter()
            .map(|row| row.key.chars().count())
            .max()
            .unwrap_or(0);
        self.write_out("Tokens:");
        for row in &view.tokens {
            let line = format!("  {:<width$}  {}", row.key, row.value, width = width);
            self.write_out(&line);
        }
    }

    fn letters_generated(&mut self, artifact_ids: &[ArtifactId]) {
        self.write_out(&format!("lettersgenerated: {} artifact(s)", artifact_ids.len()));
        for id in artifact_ids {
            self.write_out(&format!("  {id}"));
        }
    }

    fn show_error(&mut self, notification: &ErrorNotification) {
        let line = format!("{}: {}", notification.title, notification.message);
        self.write_err(&line);
    }
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "Idle",
        Phase::PreviewPending => "Previewing",
        Phase::PreviewReady => "Preview ready",
        Phase::GeneratePending => "Generating",
        Phase::GenerateComplete => "Generated",
        Phase::Failed => "Failed",
    }
}
