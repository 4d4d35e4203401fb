use crate::{ArtifactId, ErrorNotification, MergeRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue a non-committing preview call.
    RequestPreview(MergeRequest),
    /// Issue a committing generate call.
    RequestGenerate(MergeRequest),
    /// Copy the stored preview body into the presentation surface.
    ProjectPreview,
    /// One-shot completion signal carrying the created artifacts in order.
    LettersGenerated(Vec<ArtifactId>),
    /// Present an error notification once.
    ShowError(ErrorNotification),
}
