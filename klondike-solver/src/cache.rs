use std::collections::HashMap;

const NIL: usize = usize::MAX;

struct Entry<V> {
    key: u64,
    value: V,
    prev: usize,
    next: usize,
}

/// Bounded `u64`-keyed map with least-recently-used eviction.
///
/// Slots live in a slab that never exceeds the configured capacity;
/// recency order is an intrusive doubly-linked list through the slab, so
/// a full cache does no allocation on lookup or insert. A hit promotes
/// the entry to most recent.
pub struct LruCache<V> {
    map: HashMap<u64, usize>,
    entries: Vec<Entry<V>>,
    head: usize,
    tail: usize,
    capacity: usize,
}

impl<V> LruCache<V> {
    pub fn new(capacity: usize) -> Self {
        LruCache {
            map: HashMap::new(),
            entries: Vec::new(),
            head: NIL,
            tail: NIL,
            capacity: capacity.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a key, promoting it to most recent on a hit
    pub fn get(&mut self, key: u64) -> Option<&V> {
        let idx = *self.map.get(&key)?;
        self.detach(idx);
        self.attach_front(idx);
        Some(&self.entries[idx].value)
    }

    /// Insert or replace a value, evicting the least recent entry when the
    /// cache is at capacity
    pub fn insert(&mut self, key: u64, value: V) {
        if let Some(&idx) = self.map.get(&key) {
            self.entries[idx].value = value;
            self.detach(idx);
            self.attach_front(idx);
            return;
        }
        let idx = if self.entries.len() < self.capacity {
            self.entries.push(Entry {
                key,
                value,
                prev: NIL,
                next: NIL,
            });
            self.entries.len() - 1
        } else {
            // Reuse the least recent slot
            let idx = self.tail;
            self.detach(idx);
            let entry = &mut self.entries[idx];
            self.map.remove(&entry.key);
            entry.key = key;
            entry.value = value;
            idx
        };
        self.map.insert(key, idx);
        self.attach_front(idx);
    }

    fn detach(&mut self, idx: usize) {
        let (prev, next) = (self.entries[idx].prev, self.entries[idx].next);
        if prev == NIL {
            self.head = next;
        } else {
            self.entries[prev].next = next;
        }
        if next == NIL {
            self.tail = prev;
        } else {
            self.entries[next].prev = prev;
        }
        self.entries[idx].prev = NIL;
        self.entries[idx].next = NIL;
    }

    fn attach_front(&mut self, idx: usize) {
        self.entries[idx].prev = NIL;
        self.entries[idx].next = self.head;
        if self.head != NIL {
            self.entries[self.head].prev = idx;
        }
        self.head = idx;
        if self.tail == NIL {
            self.tail = idx;
        }
    }
}
