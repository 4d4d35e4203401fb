use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use merge_core::MergeRequest;
use merge_logging::merge_info;

use crate::service::{HttpMergeService, MergeService, ServiceSettings};
use crate::{EngineEvent, ServiceError};

enum EngineCommand {
    Preview(MergeRequest),
    Generate(MergeRequest),
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build merge service: {0}")]
    Service(#[from] ServiceError),
}

/// Runs remote merge calls on a background tokio runtime. Every command is
/// spawned as its own task, so completions arrive in resolution order.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ServiceSettings) -> Result<Self, EngineError> {
        let service = HttpMergeService::new(settings)?;
        Self::with_service(Arc::new(service))
    }

    pub fn with_service(service: Arc<dyn MergeService>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let service = service.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(service.as_ref(), command, event_tx).await;
                });
            }
            merge_info!("Engine command channel closed; shutting down runtime");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn preview(&self, request: MergeRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Preview(request));
    }

    pub fn generate(&self, request: MergeRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Generate(request));
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    service: &dyn MergeService,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::Preview(request) => {
            EngineEvent::PreviewCompleted(service.preview(&request).await)
        }
        EngineCommand::Generate(request) => {
            EngineEvent::GenerateCompleted(service.generate(&request).await)
        }
    };
    let _ = event_tx.send(event);
}
