use crate::{Effect, ErrorNotification, MergeState, Msg, Phase, RemoteFailure};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: MergeState, msg: Msg) -> (MergeState, Vec<Effect>) {
    let effects = match msg {
        Msg::SourceChanged(source_id) => {
            state.set_source(source_id);
            Vec::new()
        }
        Msg::TemplateChanged(template_id) => {
            state.set_template(template_id);
            Vec::new()
        }
        Msg::DeliveryChanged(mode) => {
            state.set_delivery_mode(mode);
            Vec::new()
        }
        Msg::PreviewClicked => match state.build_request(true) {
            Some(request) => {
                // Overlapping previews are allowed; whichever response is
                // applied last wins.
                state.enter(Phase::PreviewPending);
                vec![Effect::RequestPreview(request)]
            }
            None => Vec::new(),
        },
        Msg::GenerateClicked => {
            // A click while a generate is in flight is dropped, not queued.
            if !state.is_ready_to_generate() {
                return (state, Vec::new());
            }
            match state.build_request(false) {
                Some(request) => {
                    state.begin_generate();
                    vec![Effect::RequestGenerate(request)]
                }
                None => Vec::new(),
            }
        }
        Msg::PreviewLoaded(Ok(preview)) => {
            state.store_preview(preview);
            vec![Effect::ProjectPreview]
        }
        Msg::PreviewLoaded(Err(failure)) => fail(&mut state, &failure),
        Msg::GenerateFinished(result) => {
            state.end_generate();
            match result {
                Ok(artifact_ids) => {
                    state.enter(Phase::GenerateComplete);
                    vec![Effect::LettersGenerated(artifact_ids)]
                }
                Err(failure) => fail(&mut state, &failure),
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// The previously loaded preview, if any, is kept.
fn fail(state: &mut MergeState, failure: &RemoteFailure) -> Vec<Effect> {
    state.enter(Phase::Failed);
    vec![Effect::ShowError(ErrorNotification::from_failure(failure))]
}
