//! Mail merge engine: remote service client and effect execution.
mod engine;
mod service;
mod types;
mod wire;

pub use engine::{EngineError, EngineHandle};
pub use service::{HttpMergeService, MergeService, ServiceSettings};
pub use types::{EngineEvent, FailureKind, ServiceError};
