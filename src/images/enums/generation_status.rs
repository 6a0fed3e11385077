#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStatus {
    Pending,
    Resolved,
}

impl GenerationStatus {
    pub fn value(&self) -> &str {
        match *self {
            Self::Pending => "pending",
            Self::Resolved => "resolved",
        }
    }
}
