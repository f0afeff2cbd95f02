//! Pooling factory that issues and reclaims tile content.

use std::sync::atomic::{AtomicU32, Ordering};

use tile_defence_core::ContentType;
use tracing::trace;

static NEXT_POOL_ID: AtomicU32 = AtomicU32::new(0);

/// Identity stamped onto every content object issued by a pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PoolId(u32);

impl PoolId {
    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Content held by exactly one tile at a time.
///
/// Objects cannot be cloned, and returning one to its pool consumes it, so
/// each object is released at most once.
#[derive(Debug, PartialEq, Eq)]
pub struct ContentObject {
    kind: ContentType,
    origin: PoolId,
    serial: u64,
}

impl ContentObject {
    /// Type of content represented by the object.
    #[must_use]
    pub const fn kind(&self) -> ContentType {
        self.kind
    }

    /// Identity of the pool that issued the object.
    #[must_use]
    pub const fn origin(&self) -> PoolId {
        self.origin
    }

    /// Issue order of the object within its origin pool.
    #[must_use]
    pub const fn serial(&self) -> u64 {
        self.serial
    }
}

/// Factory that creates content objects and destroys the ones returned to it.
#[derive(Debug)]
pub struct ContentPool {
    id: PoolId,
    issued: u64,
    reclaimed: u64,
}

impl ContentPool {
    /// Creates a pool with a process-unique identity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: PoolId(NEXT_POOL_ID.fetch_add(1, Ordering::Relaxed)),
            issued: 0,
            reclaimed: 0,
        }
    }

    /// Identity stamped onto objects issued by this pool.
    #[must_use]
    pub const fn id(&self) -> PoolId {
        self.id
    }

    /// Creates a new content object of the requested type.
    #[must_use]
    pub fn acquire(&mut self, kind: ContentType) -> ContentObject {
        let serial = self.issued;
        self.issued += 1;
        trace!(pool = self.id.get(), serial, ?kind, "issued content");
        ContentObject {
            kind,
            origin: self.id,
            serial,
        }
    }

    /// Destroys a content object previously issued by this pool.
    ///
    /// # Panics
    ///
    /// Panics when the object originates from a different pool.
    pub fn release(&mut self, content: ContentObject) {
        assert_eq!(
            content.origin, self.id,
            "content {:?} released to pool {:?} that did not issue it",
            content.kind, self.id
        );
        self.reclaimed += 1;
        trace!(
            pool = self.id.get(),
            serial = content.serial,
            kind = ?content.kind,
            "reclaimed content"
        );
    }

    /// Number of objects issued since the pool was created.
    #[must_use]
    pub const fn issued(&self) -> u64 {
        self.issued
    }

    /// Number of objects returned to the pool.
    #[must_use]
    pub const fn reclaimed(&self) -> u64 {
        self.reclaimed
    }

    /// Number of issued objects that have not been returned yet.
    #[must_use]
    pub const fn live(&self) -> u64 {
        self.issued - self.reclaimed
    }
}

impl Default for ContentPool {
    fn default() -> Self {
        Self::new()
    }
}
