//! Configuration for the analysis pass.

use gua_core::Hexagram;

use crate::context::ContextType;
use crate::report::{Report, analyze};
use crate::text::TextLookup;

/// Options for turning a hexagram into a report.
#[derive(Debug, Clone, Default)]
pub struct AnalysisConfig {
    /// Interpretation context.
    pub context: ContextType,
}

impl AnalysisConfig {
    /// Set the interpretation context.
    pub fn with_context(mut self, context: ContextType) -> Self {
        self.context = context;
        self
    }

    /// Analyze a hexagram with these options.
    pub fn analyze(&self, hexagram: &Hexagram, texts: &dyn TextLookup) -> Report {
        analyze(hexagram, self.context, texts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        assert_eq!(AnalysisConfig::default().context, ContextType::General);
    }

    #[test]
    fn builder_methods() {
        let cfg = AnalysisConfig::default().with_context(ContextType::Health);
        assert_eq!(cfg.context, ContextType::Health);
    }
}
