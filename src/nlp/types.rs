// Shared value types passed between the NLP collaborators.

/// A token paired with its Penn Treebank part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub text: String,
    pub tag: String,
}

impl TaggedToken {
    pub fn new(text: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tag: tag.into(),
        }
    }
}

/// Coarse WordNet-style word class the lemmatizer works with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordClass {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

/// Named-entity category assigned by a chunker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityCategory {
    Person,
    Organization,
    Location,
    Gpe,
    Facility,
}

/// One element of a chunker's output: either a labeled multi-token span
/// or a token that belongs to no entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk {
    Entity {
        tokens: Vec<TaggedToken>,
        category: EntityCategory,
    },
    Plain(TaggedToken),
}

impl Chunk {
    /// Surface text of an entity span, tokens joined by a single space.
    /// `None` for plain tokens.
    pub fn entity_name(&self) -> Option<String> {
        match self {
            Chunk::Entity { tokens, .. } => Some(
                tokens
                    .iter()
                    .map(|t| t.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            Chunk::Plain(_) => None,
        }
    }
}
