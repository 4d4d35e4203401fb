//! Mail merge core: pure preview/generate state machine and view-model helpers.
mod effect;
mod msg;
mod notification;
mod request;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use notification::{
    ErrorNotification, FailureBody, RemoteFailure, Severity, DEFAULT_ERROR_MESSAGE, ERROR_TITLE,
};
pub use request::{
    ArtifactId, DeliveryMode, MergeRequest, PreviewResult, TokenEntry, UnknownDeliveryMode,
};
pub use state::{MergeState, Phase, PreviewSurface};
pub use update::update;
pub use view_model::{DeliveryOptionView, MergeViewModel, TokenRowView};
