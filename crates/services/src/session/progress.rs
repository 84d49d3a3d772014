/// Aggregated view of module progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProgress {
    pub step: usize,
    pub total: usize,
    pub confirmed: usize,
    pub quiz_visible: bool,
    pub is_complete: bool,
}
