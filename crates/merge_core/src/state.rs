use crate::view_model::{DeliveryOptionView, MergeViewModel, TokenRowView};
use crate::{DeliveryMode, MergeRequest, PreviewResult, TokenEntry};

/// Last transition taken by the session. Every phase accepts new input and
/// actions; `Failed` and `GenerateComplete` only describe the latest call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    PreviewPending,
    PreviewReady,
    GeneratePending,
    GenerateComplete,
    Failed,
}

/// Where the rendered preview body is displayed.
pub trait PreviewSurface {
    fn show_preview_body(&mut self, body: &str);
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MergeState {
    source_id: String,
    template_id: String,
    delivery_mode: DeliveryMode,
    phase: Phase,
    generating: bool,
    preview: Option<PreviewResult>,
    dirty: bool,
}

impl MergeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> MergeViewModel {
        MergeViewModel {
            source_id: self.source_id.clone(),
            template_id: self.template_id.clone(),
            delivery_mode: self.delivery_mode,
            delivery_options: DeliveryMode::OPTIONS
                .into_iter()
                .map(|mode| DeliveryOptionView {
                    mode,
                    label: mode.label(),
                    selected: mode == self.delivery_mode,
                })
                .collect(),
            phase: self.phase,
            generating: self.generating,
            preview_enabled: self.has_inputs(),
            generate_enabled: self.is_ready_to_generate(),
            preview_body: self
                .preview
                .as_ref()
                .map(|preview| preview.rendered_body.clone()),
            tokens: self
                .token_entries()
                .map(|entry| TokenRowView {
                    key: entry.key.to_string(),
                    value: entry.value.to_string(),
                })
                .collect(),
            dirty: self.dirty,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn template_id(&self) -> &str {
        &self.template_id
    }

    pub fn delivery_mode(&self) -> DeliveryMode {
        self.delivery_mode
    }

    pub fn preview(&self) -> Option<&PreviewResult> {
        self.preview.as_ref()
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub fn is_ready_to_generate(&self) -> bool {
        self.has_inputs() && !self.generating
    }

    /// Resolved tokens of the current preview. Call again to restart; empty
    /// until a preview has been loaded.
    pub fn token_entries(&self) -> impl Iterator<Item = TokenEntry<'_>> + Clone + '_ {
        self.preview
            .iter()
            .flat_map(|preview| preview.tokens.iter())
            .map(|(key, value)| TokenEntry { key, value })
    }

    /// Copies the current rendered body into `surface`. No-op without a preview.
    pub fn project_preview(&self, surface: &mut dyn PreviewSurface) {
        if let Some(preview) = &self.preview {
            surface.show_preview_body(&preview.rendered_body);
        }
    }

    /// Returns whether anything observable changed since the last call.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_source(&mut self, source_id: String) {
        if self.source_id != source_id {
            self.source_id = source_id;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_template(&mut self, template_id: String) {
        if self.template_id != template_id {
            self.template_id = template_id;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_delivery_mode(&mut self, mode: DeliveryMode) {
        if self.delivery_mode != mode {
            self.delivery_mode = mode;
            self.mark_dirty();
        }
    }

    /// Builds a fresh request from the current inputs, or `None` while either
    /// identifier is empty.
    pub(crate) fn build_request(&self, preview_only: bool) -> Option<MergeRequest> {
        if !self.has_inputs() {
            return None;
        }
        Some(MergeRequest {
            source_id: self.source_id.clone(),
            template_id: self.template_id.clone(),
            delivery_mode: self.delivery_mode,
            preview_only,
        })
    }

    pub(crate) fn enter(&mut self, phase: Phase) {
        self.phase = phase;
        self.mark_dirty();
    }

    pub(crate) fn store_preview(&mut self, preview: PreviewResult) {
        self.preview = Some(preview);
        self.enter(Phase::PreviewReady);
    }

    pub(crate) fn begin_generate(&mut self) {
        self.generating = true;
        self.enter(Phase::GeneratePending);
    }

    pub(crate) fn end_generate(&mut self) {
        self.generating = false;
        self.mark_dirty();
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn has_inputs(&self) -> bool {
        !self.source_id.is_empty() && !self.template_id.is_empty()
    }
}
