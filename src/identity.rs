// src/identity.rs
//! Stable identity for a news item, used to spot repeats across days and
//! within a single day's snapshot.

use crate::normalize::{clean_title, normalize_url};
use crate::types::FlatItem;

/// Which signal identified an item. URL beats title: a link is a stronger
/// claim of sameness than a headline, and headlines get re-edited during the
/// day while the link stays put.
///
/// The two variants never compare equal to each other, so a title that
/// happens to look like some URL cannot collide with it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identity {
    /// Canonicalized URL, from [`normalize_url`].
    Url(String),
    /// Cleaned, lowercased title, from [`clean_title`].
    Title(String),
}

impl Identity {
    /// Derive the identity of a flattened item.
    ///
    /// Items with a non-empty URL are identified by the canonical form of
    /// that URL; everything else falls back to the cleaned lowercase title.
    /// An item with neither yields `Title("")`, which means all such
    /// degenerate items collapse into one. They carry no usable signal, so
    /// exporting one of them is enough.
    pub fn of(item: &FlatItem) -> Identity {
        match item.url.as_deref().map(str::trim) {
            Some(u) if !u.is_empty() => Identity::Url(normalize_url(u, &item.source_id)),
            _ => Identity::Title(clean_title(&item.title).to_lowercase()),
        }
    }
}
