#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupContent {
    /// Key binding overview
    Help,
}
