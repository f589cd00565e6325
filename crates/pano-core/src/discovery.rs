//! Mount-point discovery over a structural-change event stream.
//!
//! The watcher on the web side feeds batches of inserted nodes through
//! [`mounts_in_batch`] and gates every hit through a [`SeenRegistry`], so
//! an element reported by both the initial scan and a later insertion
//! event is processed exactly once.

use std::collections::HashSet;

/// Class marking an element as a viewer mount point.
pub const MOUNT_MARKER_CLASS: &str = "pano-viewer";

/// Selector form of [`MOUNT_MARKER_CLASS`].
pub const MOUNT_MARKER_SELECTOR: &str = ".pano-viewer";

/// A node reported by the structural-change stream. Implemented for live
/// DOM nodes on the web side and for plain test trees natively.
pub trait MountCandidate: Sized {
    fn is_element(&self) -> bool;
    fn matches_marker(&self) -> bool;
    fn marked_descendants(&self) -> Vec<Self>;
}

/// Map one batch of inserted nodes to the mount points it contains: a
/// marked element contributes itself, any other element contributes its
/// marked descendants. Non-element nodes are ignored. Order within a batch
/// carries no semantics.
pub fn mounts_in_batch<N: MountCandidate>(batch: Vec<N>) -> Vec<N> {
    let mut mounts = Vec::new();
    for node in batch {
        if !node.is_element() {
            continue;
        }
        if node.matches_marker() {
            mounts.push(node);
        } else {
            mounts.extend(node.marked_descendants());
        }
    }
    mounts
}

/// Identity-keyed set of already-processed mount elements, owned by the
/// watcher instead of written onto foreign DOM nodes.
#[derive(Debug, Default)]
pub struct SeenRegistry {
    seen: HashSet<String>,
}

impl SeenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// True exactly once per key. The check and the mark are a single
    /// synchronous step; re-observing a known key is a no-op.
    pub fn first_visit(&mut self, key: &str) -> bool {
        self.seen.insert(key.to_owned())
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
