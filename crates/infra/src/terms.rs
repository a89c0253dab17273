use std::sync::atomic::{AtomicU64, Ordering};

use farmlog_core::TermId;
use farmlog_log::Term;
use farmlog_quick::TermLookup;

use crate::store::{InMemoryStore, KeyedStore};

/// In-memory taxonomy storage with auto-create support.
#[derive(Debug)]
pub struct InMemoryTermStore {
    terms: InMemoryStore<TermId, Term>,
    next_id: AtomicU64,
}

impl Default for InMemoryTermStore {
    fn default() -> Self {
        Self {
            terms: InMemoryStore::new(),
            next_id: AtomicU64::new(1),
        }
    }
}

impl InMemoryTermStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a term with a caller-chosen id.
    pub fn insert(&self, term: Term) {
        self.next_id.fetch_max(term.id.get() + 1, Ordering::SeqCst);
        self.terms.upsert(term.id, term);
    }

    /// The term named `name` in `vocabulary`, created when missing.
    ///
    /// This is what auto-creating reference widgets do with labels that
    /// match nothing.
    pub fn find_or_create(&self, vocabulary: &str, name: &str) -> Term {
        let name = name.trim();
        if let Some(existing) = self
            .terms
            .list()
            .into_iter()
            .find(|t| t.vocabulary == vocabulary && t.name == name)
        {
            return existing;
        }

        let id = TermId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let term = Term::new(id, vocabulary, name);
        self.terms.upsert(id, term.clone());
        tracing::debug!(term = %id, vocabulary, name, "auto-created term");
        term
    }

    pub fn vocabulary(&self, vocabulary: &str) -> Vec<Term> {
        let mut terms: Vec<Term> = self
            .terms
            .list()
            .into_iter()
            .filter(|t| t.vocabulary == vocabulary)
            .collect();
        terms.sort_by(|a, b| a.name.cmp(&b.name));
        terms
    }
}

impl TermLookup for InMemoryTermStore {
    fn by_id(&self, id: TermId) -> Option<Term> {
        self.terms.get(&id)
    }
}
