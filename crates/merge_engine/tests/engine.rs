use std::sync::{Arc, Mutex};
use std::time::Duration;

use merge_core::{ArtifactId, DeliveryMode, MergeRequest, PreviewResult};
use merge_engine::{EngineEvent, EngineHandle, FailureKind, MergeService, ServiceError};

const WAIT: Duration = Duration::from_secs(5);

/// Scripted service: preview delays are taken from the template id so tests
/// can make responses resolve out of order.
#[derive(Default)]
struct ScriptedService {
    calls: Mutex<Vec<MergeRequest>>,
}

impl ScriptedService {
    fn calls(&self) -> Vec<MergeRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl MergeService for ScriptedService {
    async fn preview(&self, request: &MergeRequest) -> Result<PreviewResult, ServiceError> {
        self.calls.lock().unwrap().push(request.clone());
        let delay_ms = request.template_id.parse::<u64>().unwrap_or(0);
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        Ok(PreviewResult::new(
            format!("rendered {}", request.template_id),
            [("template", request.template_id.as_str())],
        ))
    }

    async fn generate(&self, request: &MergeRequest) -> Result<Vec<ArtifactId>, ServiceError> {
        self.calls.lock().unwrap().push(request.clone());
        if request.source_id == "locked" {
            return Err(ServiceError {
                kind: FailureKind::HttpStatus(409),
                message: "409 Conflict".to_string(),
                body_message: Some("Template locked".to_string()),
            });
        }
        Ok(vec!["doc-1".to_string(), "doc-2".to_string()])
    }
}

fn request(source: &str, template: &str, preview_only: bool) -> MergeRequest {
    MergeRequest {
        source_id: source.to_string(),
        template_id: template.to_string(),
        delivery_mode: DeliveryMode::File,
        preview_only,
    }
}

#[test]
fn engine_reports_generate_completion() {
    let service = Arc::new(ScriptedService::default());
    let engine = EngineHandle::with_service(service.clone()).expect("engine");

    engine.generate(request("R1", "T1", false));

    let event = engine.recv_timeout(WAIT).expect("event");
    assert_eq!(
        event,
        EngineEvent::GenerateCompleted(Ok(vec!["doc-1".to_string(), "doc-2".to_string()]))
    );
    assert_eq!(service.calls(), vec![request("R1", "T1", false)]);
}

#[test]
fn engine_reports_service_failure() {
    let service = Arc::new(ScriptedService::default());
    let engine = EngineHandle::with_service(service).expect("engine");

    engine.generate(request("locked", "T1", false));

    match engine.recv_timeout(WAIT).expect("event") {
        EngineEvent::GenerateCompleted(Err(err)) => {
            assert_eq!(err.body_message.as_deref(), Some("Template locked"));
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn overlapping_previews_complete_in_resolution_order() {
    let service = Arc::new(ScriptedService::default());
    let engine = EngineHandle::with_service(service).expect("engine");

    engine.preview(request("R1", "300", true));
    engine.preview(request("R1", "0", true));

    let bodies: Vec<_> = (0..2)
        .map(|_| match engine.recv_timeout(WAIT).expect("event") {
            EngineEvent::PreviewCompleted(Ok(preview)) => preview.rendered_body,
            other => panic!("unexpected event: {other:?}"),
        })
        .collect();

    assert_eq!(bodies, vec!["rendered 0", "rendered 300"]);
    assert!(engine.try_recv().is_none());
}
