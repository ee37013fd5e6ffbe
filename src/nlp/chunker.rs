// Named-entity chunker: proper-noun runs plus small gazetteers.
//
// Consecutive NNP/NNPS tokens form one entity span. The category comes
// from marker words inside the span (organizations, facilities), a
// gazetteer of place names, and falls back to Person.

use std::collections::HashSet;

use super::traits::EntityChunker;
use super::types::{Chunk, EntityCategory, TaggedToken};
use crate::error::NlpError;

const ORGANIZATION_MARKERS: &[&str] = &[
    "house", "guild", "company", "order", "council", "church", "court", "academy",
    "university", "brotherhood", "league", "senate", "army", "fleet", "bank", "inc", "corp",
];

const FACILITY_MARKERS: &[&str] = &[
    "castle", "tower", "bridge", "temple", "cathedral", "palace", "keep", "fortress", "abbey",
    "station", "gate",
];

const LOCATION_MARKERS: &[&str] = &[
    "river", "mountain", "mountains", "sea", "ocean", "forest", "valley", "lake", "isle",
    "island", "nebula", "galaxy",
];

const PLACES: &[&str] = &[
    "verona", "mantua", "padua", "venice", "rome", "florence", "milan", "naples", "italy",
    "england", "france", "spain", "london", "paris", "earth", "mars", "venus", "jupiter",
    "saturn", "europe", "america", "asia", "africa",
];

const PERSON_TITLES: &[&str] = &[
    "lord", "lady", "sir", "king", "queen", "prince", "princess", "duke", "count", "countess",
    "friar", "captain", "master", "mistress",
];

pub struct GazetteerChunker {
    organizations: HashSet<&'static str>,
    facilities: HashSet<&'static str>,
    locations: HashSet<&'static str>,
    places: HashSet<&'static str>,
    titles: HashSet<&'static str>,
}

impl Default for GazetteerChunker {
    fn default() -> Self {
        Self {
            organizations: ORGANIZATION_MARKERS.iter().copied().collect(),
            facilities: FACILITY_MARKERS.iter().copied().collect(),
            locations: LOCATION_MARKERS.iter().copied().collect(),
            places: PLACES.iter().copied().collect(),
            titles: PERSON_TITLES.iter().copied().collect(),
        }
    }
}

impl GazetteerChunker {
    fn categorize(&self, span: &[TaggedToken]) -> EntityCategory {
        let words: Vec<String> = span.iter().map(|t| t.text.to_lowercase()).collect();
        let has = |set: &HashSet<&'static str>| words.iter().any(|w| set.contains(w.as_str()));

        if words.first().is_some_and(|w| self.titles.contains(w.as_str())) {
            EntityCategory::Person
        } else if has(&self.organizations) {
            EntityCategory::Organization
        } else if has(&self.facilities) {
            EntityCategory::Facility
        } else if has(&self.locations) {
            EntityCategory::Location
        } else if words.iter().all(|w| self.places.contains(w.as_str())) {
            EntityCategory::Gpe
        } else {
            EntityCategory::Person
        }
    }
}

fn is_proper_noun(token: &TaggedToken) -> bool {
    token.tag == "NNP" || token.tag == "NNPS"
}

impl EntityChunker for GazetteerChunker {
    fn chunk(&self, tagged: &[TaggedToken]) -> Result<Vec<Chunk>, NlpError> {
        let mut chunks = Vec::new();
        let mut span: Vec<TaggedToken> = Vec::new();

        for token in tagged {
            if is_proper_noun(token) {
                span.push(token.clone());
                continue;
            }
            if !span.is_empty() {
                let category = self.categorize(&span);
                chunks.push(Chunk::Entity {
                    tokens: std::mem::take(&mut span),
                    category,
                });
            }
            chunks.push(Chunk::Plain(token.clone()));
        }

        if !span.is_empty() {
            let category = self.categorize(&span);
            chunks.push(Chunk::Entity {
                tokens: span,
                category,
            });
        }

        Ok(chunks)
    }
}
