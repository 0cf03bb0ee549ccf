//! Model value object identifying the hosted LLM

/// Hosted Gemini models (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Model {
    /// The model every recipe session uses
    #[default]
    Gemini15Flash,
}

impl Model {
    /// Get the string identifier used in API paths
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gemini15Flash => "gemini-1.5-flash",
        }
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
