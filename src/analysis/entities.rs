// Named-entity extraction over tagged tokens.

use tracing::warn;

use crate::nlp::traits::EntityChunker;
use crate::nlp::types::TaggedToken;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntitySummary {
    pub count: usize,
    pub names: Vec<String>,
}

/// Extract entity surface strings. A chunker failure yields an empty
/// summary instead of an error.
pub fn extract_entities(chunker: &dyn EntityChunker, tagged: &[TaggedToken]) -> EntitySummary {
    let chunks = match chunker.chunk(tagged) {
        Ok(chunks) => chunks,
        Err(e) => {
            warn!(error = %e, "NER failed, skipping named entity recognition");
            return EntitySummary::default();
        }
    };

    let names: Vec<String> = chunks.iter().filter_map(|c| c.entity_name()).collect();
    EntitySummary {
        count: names.len(),
        names,
    }
}
