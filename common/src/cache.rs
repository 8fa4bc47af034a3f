//! Explicit invalidation of cached collection reads.
//!
//! Readers remember the generation they fetched at; a reader whose
//! generation is behind [`CollectionCache::generation`] holds a stale copy and
//! must refetch. Subscribers of a key are told as soon as it is invalidated.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

type Listener = Rc<dyn Fn(u64)>;

#[derive(Default)]
pub struct CollectionCache {
    generations: RefCell<HashMap<String, u64>>,
    listeners: RefCell<HashMap<String, Vec<Listener>>>,
}

impl CollectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self, key: &str) -> u64 {
        self.generations.borrow().get(key).copied().unwrap_or(0)
    }

    pub fn is_stale(&self, key: &str, seen_generation: u64) -> bool {
        seen_generation < self.generation(key)
    }

    /// Marks `key` stale and notifies its subscribers with the new generation.
    pub fn invalidate(&self, key: &str) {
        let generation = {
            let mut generations = self.generations.borrow_mut();
            let entry = generations.entry(key.to_string()).or_insert(0);
            *entry += 1;
            *entry
        };
        log::debug!("collection '{}' invalidated (generation {})", key, generation);

        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .get(key)
            .map(|l| l.to_vec())
            .unwrap_or_default();
        for listener in listeners {
            listener(generation);
        }
    }

    pub fn subscribe(&self, key: &str, listener: impl Fn(u64) + 'static) {
        self.listeners
            .borrow_mut()
            .entry(key.to_string())
            .or_default()
            .push(Rc::new(listener));
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn invalidation_bumps_only_its_key() {
        let cache = CollectionCache::new();
        let seen = cache.generation("images");

        cache.invalidate("images");

        assert!(cache.is_stale("images", seen));
        assert!(!cache.is_stale("images", cache.generation("images")));
        assert_eq!(cache.generation("albums"), 0);
    }

    #[test]
    fn subscribers_of_the_key_are_notified() {
        let cache = CollectionCache::new();
        let images = Rc::new(Cell::new(0));
        let albums = Rc::new(Cell::new(0));

        let sink = images.clone();
        cache.subscribe("images", move |generation| sink.set(generation));
        let sink = albums.clone();
        cache.subscribe("albums", move |generation| sink.set(generation));

        cache.invalidate("images");
        cache.invalidate("images");

        assert_eq!(images.get(), 2);
        assert_eq!(albums.get(), 0);
    }
}
