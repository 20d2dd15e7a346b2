//! Icon candidate descriptors and their ranking
//!
//! A page usually advertises several possible icons (touch icons, favicons,
//! guessed defaults). This module describes one candidate location and
//! defines the total order the pipeline uses to decide which candidate to
//! try first. The order is realized by `CandidateSet`, a ranked container
//! where peeking at the best remaining candidate is cheap and advancing to
//! the next one removes exactly the current best.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};

/// MIME types that may embed multiple resolutions in a single file.
///
/// Container formats are preferred over single-resolution formats when two
/// candidates are otherwise ranked equal, since one fetch can satisfy many
/// target sizes.
pub const CONTAINER_MIME_TYPES: &[&str] = &[
    "image/x-icon",
    "image/vnd.microsoft.icon",
    "image/ico",
    "image/icon",
    "text/ico",
    "application/ico",
];

/// The role a candidate icon plays on its page
///
/// The numeric rank drives candidate ordering: a touch icon outranks a
/// favicon regardless of declared size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    /// No specific role known (e.g. a guessed `/favicon.ico`)
    Generic,
    /// Injected from the persistent page-to-icon URL index
    Lookup,
    /// Declared `rel="icon"` style favicon
    Favicon,
    /// Declared apple-touch-icon style icon
    TouchIcon,
}

impl IconKind {
    /// Numeric rank used for ordering; higher ranks are tried first.
    #[inline]
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            IconKind::Generic => 0,
            IconKind::Lookup => 1,
            IconKind::Favicon => 5,
            IconKind::TouchIcon => 10,
        }
    }
}

/// One possible icon location with the metadata used for ranking
///
/// Immutable after construction. Two descriptors with the same `url` are
/// considered the same icon regardless of their other fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconDescriptor {
    /// Where the icon bytes live (http(s), `data:`, or `resource://`)
    pub url: String,
    /// Declared pixel size, 0 when unknown
    pub size: u32,
    /// Declared MIME type, if the page advertised one
    pub mime_type: Option<String>,
    /// Role of this candidate on its page
    pub kind: IconKind,
}

impl IconDescriptor {
    /// Create a descriptor with unknown size and no declared MIME type
    #[must_use]
    pub fn new(url: impl Into<String>, kind: IconKind) -> Self {
        Self {
            url: url.into(),
            size: 0,
            mime_type: None,
            kind,
        }
    }

    /// Set the declared pixel size
    #[must_use]
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Set the declared MIME type
    #[must_use]
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Whether the declared MIME type is a multi-resolution container format
    #[must_use]
    pub fn is_container_type(&self) -> bool {
        self.mime_type
            .as_deref()
            .is_some_and(|mime| CONTAINER_MIME_TYPES.contains(&mime))
    }
}

/// A descriptor paired with its insertion sequence number
///
/// The sequence number makes the order total and deterministic: candidates
/// that tie on kind, size, and container preference keep insertion order.
#[derive(Debug, Clone)]
struct RankedCandidate {
    descriptor: IconDescriptor,
    seq: u64,
}

impl Ord for RankedCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // "Less" means tried first: higher kind rank, then larger declared
        // size (0 = unknown naturally sorts last), then container formats,
        // then insertion order.
        other
            .descriptor
            .kind
            .rank()
            .cmp(&self.descriptor.kind.rank())
            .then_with(|| other.descriptor.size.cmp(&self.descriptor.size))
            .then_with(|| {
                other
                    .descriptor
                    .is_container_type()
                    .cmp(&self.descriptor.is_container_type())
            })
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for RankedCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for RankedCandidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankedCandidate {}

/// Ranked, URL-deduplicated set of icon candidates
///
/// Descriptors with a URL already present are rejected at insertion (the
/// first inserted wins), so the set never holds two candidates with the
/// same effective identity. `best()` peeks at the candidate to try next;
/// `remove_best()` consumes it after every loader missed.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    entries: BTreeSet<RankedCandidate>,
    urls: HashSet<String>,
    next_seq: u64,
}

impl CandidateSet {
    /// Create an empty candidate set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a candidate, returning false if its URL is already present
    pub fn insert(&mut self, descriptor: IconDescriptor) -> bool {
        if !self.urls.insert(descriptor.url.clone()) {
            return false;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.insert(RankedCandidate { descriptor, seq });
        true
    }

    /// Peek at the best remaining candidate without removing it
    #[must_use]
    pub fn best(&self) -> Option<&IconDescriptor> {
        self.entries.first().map(|ranked| &ranked.descriptor)
    }

    /// Remove and return the current best candidate
    pub fn remove_best(&mut self) -> Option<IconDescriptor> {
        let ranked = self.entries.pop_first()?;
        self.urls.remove(&ranked.descriptor.url);
        Some(ranked.descriptor)
    }

    /// Keep only candidates for which the predicate returns true
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&IconDescriptor) -> bool,
    {
        let urls = &mut self.urls;
        self.entries.retain(|ranked| {
            let kept = keep(&ranked.descriptor);
            if !kept {
                urls.remove(&ranked.descriptor.url);
            }
            kept
        });
    }

    /// Iterate candidates from best to worst
    pub fn iter(&self) -> impl Iterator<Item = &IconDescriptor> {
        self.entries.iter().map(|ranked| &ranked.descriptor)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a candidate with this URL is present
    #[must_use]
    pub fn contains_url(&self, url: &str) -> bool {
        self.urls.contains(url)
    }
}

impl FromIterator<IconDescriptor> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = IconDescriptor>>(iter: I) -> Self {
        let mut set = CandidateSet::new();
        for descriptor in iter {
            set.insert(descriptor);
        }
        set
    }
}
