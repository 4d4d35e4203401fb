use crate::{DeliveryMode, Phase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryOptionView {
    pub mode: DeliveryMode,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRowView {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MergeViewModel {
    pub source_id: String,
    pub template_id: String,
    pub delivery_mode: DeliveryMode,
    pub delivery_options: Vec<DeliveryOptionView>,
    pub phase: Phase,
    pub generating: bool,
    pub preview_enabled: bool,
    pub generate_enabled: bool,
    pub preview_body: Option<String>,
    pub tokens: Vec<TokenRowView>,
    pub dirty: bool,
}
