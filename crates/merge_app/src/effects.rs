use std::time::Duration;

use merge_core::{Effect, MergeState, Msg, RemoteFailure};
use merge_engine::{EngineEvent, EngineHandle, ServiceError};
use merge_logging::{merge_error, merge_info};

use crate::presentation::Presenter;

/// Executes core effects: remote calls go to the engine, everything else to
/// the presenter.
pub struct EffectRunner<P: Presenter> {
    engine: EngineHandle,
    presenter: P,
}

impl<P: Presenter> EffectRunner<P> {
    pub fn new(engine: EngineHandle, presenter: P) -> Self {
        Self { engine, presenter }
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    #[cfg(test)]
    pub fn into_presenter(self) -> P {
        self.presenter
    }

    pub fn run(&mut self, effects: Vec<Effect>, state: &MergeState) {
        for effect in effects {
            match effect {
                Effect::RequestPreview(request) => {
                    merge_info!(
                        "Requesting preview source={} template={} delivery={}",
                        request.source_id,
                        request.template_id,
                        request.delivery_mode
                    );
                    self.engine.preview(request);
                }
                Effect::RequestGenerate(request) => {
                    merge_info!(
                        "Requesting generation source={} template={} delivery={}",
                        request.source_id,
                        request.template_id,
                        request.delivery_mode
                    );
                    self.engine.generate(request);
                }
                Effect::ProjectPreview => state.project_preview(&mut self.presenter),
                Effect::LettersGenerated(artifact_ids) => {
                    merge_info!("Letters generated: {:?}", artifact_ids);
                    self.presenter.letters_generated(&artifact_ids);
                }
                Effect::ShowError(notification) => {
                    self.presenter.show_error(&notification);
                }
            }
        }
    }

    /// Waits up to `timeout` for the next engine completion.
    pub fn next_msg(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(event_to_msg)
    }
}

fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::PreviewCompleted(result) => {
            Msg::PreviewLoaded(result.map_err(|err| to_failure("preview", err)))
        }
        EngineEvent::GenerateCompleted(result) => {
            Msg::GenerateFinished(result.map_err(|err| to_failure("generate", err)))
        }
    }
}

fn to_failure(operation: &str, err: ServiceError) -> RemoteFailure {
    merge_error!("Mail merge error ({}): {}", operation, err);
    RemoteFailure::from(err)
}
