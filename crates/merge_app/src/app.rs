use std::time::Duration;

use anyhow::{anyhow, bail};
use merge_core::{update, DeliveryMode, MergeState, Msg, Phase};

use crate::effects::EffectRunner;
use crate::presentation::Presenter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInputs {
    pub source_id: String,
    pub template_id: String,
    pub delivery_mode: DeliveryMode,
    /// Confirm generation once the preview has rendered.
    pub generate: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Previewed,
    Generated,
    Failed,
}

pub struct MergeApp<P: Presenter> {
    state: MergeState,
    runner: EffectRunner<P>,
    response_timeout: Duration,
}

impl<P: Presenter> MergeApp<P> {
    pub fn new(runner: EffectRunner<P>, response_timeout: Duration) -> Self {
        Self {
            state: MergeState::new(),
            runner,
            response_timeout,
        }
    }

    #[cfg(test)]
    pub fn into_presenter(self) -> P {
        self.runner.into_presenter()
    }

    pub fn run(&mut self, inputs: &SessionInputs) -> anyhow::Result<SessionOutcome> {
        self.dispatch(Msg::SourceChanged(inputs.source_id.clone()));
        self.dispatch(Msg::TemplateChanged(inputs.template_id.clone()));
        self.dispatch(Msg::DeliveryChanged(inputs.delivery_mode));
        if !self.state.view().preview_enabled {
            bail!("both a source id and a template id are required");
        }

        self.dispatch(Msg::PreviewClicked);
        self.settle(|state| state.phase() == Phase::PreviewPending)?;
        if self.state.phase() != Phase::PreviewReady {
            return Ok(SessionOutcome::Failed);
        }
        if !inputs.generate {
            return Ok(SessionOutcome::Previewed);
        }

        self.dispatch(Msg::GenerateClicked);
        self.settle(MergeState::is_generating)?;
        Ok(match self.state.phase() {
            Phase::GenerateComplete => SessionOutcome::Generated,
            _ => SessionOutcome::Failed,
        })
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;

        if was_dirty {
            self.render();
        }
        self.runner.run(effects, &self.state);
    }

    fn render(&mut self) {
        let view = self.state.view();
        let presenter = self.runner.presenter_mut();
        presenter.render(&view);
        // Re-project after every render so the last good preview stays visible.
        self.state.project_preview(presenter);
    }

    /// Feeds engine completions back into the state while `pending` holds.
    fn settle(&mut self, pending: impl Fn(&MergeState) -> bool) -> anyhow::Result<()> {
        while pending(&self.state) {
            let msg = self.runner.next_msg(self.response_timeout).ok_or_else(|| {
                anyhow!(
                    "merge service did not answer within {:?}",
                    self.response_timeout
                )
            })?;
            self.dispatch(msg);
        }
        Ok(())
    }
}
