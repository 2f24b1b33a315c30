//! History stack held in memory, standing in for the browser history.

use std::sync::{Mutex, MutexGuard, PoisonError};

use portal_core::ports::{Location, RouterPort};

#[derive(Debug)]
struct History {
    entries: Vec<Location>,
    index: usize,
}

/// In-memory router. `push` adds an entry, `replace` overwrites the current one.
/// 内存路由：push 新增历史记录，replace 覆盖当前记录
#[derive(Debug)]
pub struct MemoryRouter {
    history: Mutex<History>,
}

impl MemoryRouter {
    pub fn new(initial: Location) -> Self {
        Self {
            history: Mutex::new(History {
                entries: vec![initial],
                index: 0,
            }),
        }
    }

    /// Start at a relative URL such as `/projects?term=Fall`.
    pub fn at(url: &str) -> Self {
        Self::new(Location::parse(url))
    }

    /// Navigate to a new entry, discarding any forward entries.
    pub fn push(&self, location: Location) {
        let mut history = self.lock();
        let next = history.index + 1;
        history.entries.truncate(next);
        history.entries.push(location);
        history.index = next;
    }

    /// Step back one entry. Returns false at the first entry.
    pub fn back(&self) -> bool {
        let mut history = self.lock();
        if history.index == 0 {
            return false;
        }
        history.index -= 1;
        true
    }

    /// Number of history entries.
    pub fn depth(&self) -> usize {
        self.lock().entries.len()
    }

    fn lock(&self) -> MutexGuard<'_, History> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RouterPort for MemoryRouter {
    fn location(&self) -> Location {
        let history = self.lock();
        history.entries[history.index].clone()
    }

    fn replace(&self, location: Location) {
        let mut history = self.lock();
        let index = history.index;
        history.entries[index] = location;
    }
}
