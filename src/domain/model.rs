/// What a finished demo reports back to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSummary {
    pub name: String,
    /// Number of result lines or values the demo printed.
    pub items_printed: usize,
}

impl DemoSummary {
    pub fn new(name: impl Into<String>, items_printed: usize) -> Self {
        Self {
            name: name.into(),
            items_printed,
        }
    }
}
