use crate::{ArtifactId, DeliveryMode, PreviewResult, RemoteFailure};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the data source identifier.
    SourceChanged(String),
    /// User edited the template identifier.
    TemplateChanged(String),
    /// User picked a delivery mode.
    DeliveryChanged(DeliveryMode),
    /// User clicked Preview.
    PreviewClicked,
    /// User clicked Generate.
    GenerateClicked,
    /// A preview call resolved.
    PreviewLoaded(Result<PreviewResult, RemoteFailure>),
    /// A generate call resolved.
    GenerateFinished(Result<Vec<ArtifactId>, RemoteFailure>),
    /// Fallback for placeholder wiring.
    NoOp,
}
