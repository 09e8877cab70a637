use std::collections::HashSet;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};

use crate::error::StoreResult;
use crate::models::{IdeaDraft, IdeaId, VideoIdea};
use crate::seed::seed_ideas;
use crate::storage::IdeaPersistence;

/// What to start with when nothing usable is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitStrategy {
    #[default]
    LoadOrSeed,
    LoadOrEmpty,
}

/// How the in-memory list was obtained at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOrigin {
    Loaded { count: usize },
    Seeded,
    Empty,
    /// Stored data could not be used; the fresh-start list was used instead.
    Recovered { reason: String },
}

impl LoadOrigin {
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            LoadOrigin::Recovered { reason } => Some(format!(
                "Saved ideas could not be loaded and were replaced with defaults: {reason}"
            )),
            _ => None,
        }
    }
}

/// Ordered list of ideas (newest first) mirrored to a persistence port
/// after every mutation.
#[derive(Debug)]
pub struct IdeaStore<P> {
    ideas: Vec<VideoIdea>,
    persistence: P,
    origin: LoadOrigin,
}

impl<P: IdeaPersistence> IdeaStore<P> {
    pub fn initialize(persistence: P, strategy: InitStrategy) -> Self {
        Self::initialize_at(persistence, strategy, Utc::now())
    }

    /// Loads the stored list, or falls back to the strategy's fresh-start
    /// list. Never fails: unusable data is reported through [`LoadOrigin`].
    pub fn initialize_at(mut persistence: P, strategy: InitStrategy, now: DateTime<Utc>) -> Self {
        let (ideas, origin) = match persistence.load() {
            Ok(Some(stored)) => {
                let ideas = dedup_by_id(stored);
                info!("Loaded {} stored ideas", ideas.len());
                let count = ideas.len();
                (ideas, LoadOrigin::Loaded { count })
            }
            Ok(None) => {
                let (ideas, origin) = fresh_start(strategy, now);
                if !ideas.is_empty() {
                    if let Err(e) = persistence.save(&ideas) {
                        warn!("Failed to store seed ideas: {e}");
                    }
                }
                info!("No stored ideas found, starting with {} ideas", ideas.len());
                (ideas, origin)
            }
            Err(e) => {
                warn!("Ignoring stored ideas: {e}");
                let (ideas, _) = fresh_start(strategy, now);
                (
                    ideas,
                    LoadOrigin::Recovered {
                        reason: e.to_string(),
                    },
                )
            }
        };

        Self {
            ideas,
            persistence,
            origin,
        }
    }

    pub fn ideas(&self) -> &[VideoIdea] {
        &self.ideas
    }

    pub fn get(&self, id: &str) -> Option<&VideoIdea> {
        self.ideas.iter().find(|idea| idea.id == id)
    }

    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }

    pub fn origin(&self) -> &LoadOrigin {
        &self.origin
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    pub fn add(&mut self, draft: IdeaDraft) -> StoreResult<IdeaId> {
        self.add_at(draft, Utc::now())
    }

    /// Prepends a new idea created at `now` and persists the list.
    ///
    /// The id is `now` in epoch milliseconds, bumped until it is unused. On a
    /// write failure the idea stays in memory and the error is returned.
    pub fn add_at(&mut self, draft: IdeaDraft, now: DateTime<Utc>) -> StoreResult<IdeaId> {
        let id = self.next_id(now);
        self.ideas
            .insert(0, VideoIdea::from_draft(id.clone(), draft, now));
        debug!("Added idea {id}");
        self.persist()?;
        Ok(id)
    }

    /// Returns `Ok(false)` without writing when `id` is unknown.
    pub fn update(&mut self, id: &str, draft: IdeaDraft) -> StoreResult<bool> {
        let Some(idea) = self.ideas.iter_mut().find(|idea| idea.id == id) else {
            debug!("Update of unknown idea {id} ignored");
            return Ok(false);
        };
        idea.apply_draft(draft);
        debug!("Updated idea {id}");
        self.persist()?;
        Ok(true)
    }

    /// Returns `Ok(false)` without writing when `id` is unknown.
    pub fn remove(&mut self, id: &str) -> StoreResult<bool> {
        let Some(index) = self.ideas.iter().position(|idea| idea.id == id) else {
            debug!("Removal of unknown idea {id} ignored");
            return Ok(false);
        };
        self.ideas.remove(index);
        debug!("Removed idea {id}");
        self.persist()?;
        Ok(true)
    }

    /// Writes the full list, replacing the stored value.
    pub fn persist(&mut self) -> StoreResult<()> {
        self.persistence.save(&self.ideas).inspect_err(|e| {
            warn!("Failed to persist {} ideas: {e}", self.ideas.len());
        })
    }

    fn next_id(&self, now: DateTime<Utc>) -> IdeaId {
        let mut candidate = now.timestamp_millis();
        loop {
            let id = candidate.to_string();
            if self.get(&id).is_none() {
                return id;
            }
            candidate += 1;
        }
    }
}

fn fresh_start(strategy: InitStrategy, now: DateTime<Utc>) -> (Vec<VideoIdea>, LoadOrigin) {
    match strategy {
        InitStrategy::LoadOrSeed => (seed_ideas(now), LoadOrigin::Seeded),
        InitStrategy::LoadOrEmpty => (Vec::new(), LoadOrigin::Empty),
    }
}

fn dedup_by_id(ideas: Vec<VideoIdea>) -> Vec<VideoIdea> {
    let mut seen = HashSet::new();
    ideas
        .into_iter()
        .filter(|idea| {
            let first = seen.insert(idea.id.clone());
            if !first {
                warn!("Dropping stored idea with duplicate id {}", idea.id);
            }
            first
        })
        .collect()
}
