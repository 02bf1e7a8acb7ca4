//! Pure narrowing filter over a bookmark collection.
//!
//! Each stage consumes the previous stage's output and keeps the original order.
//! There is no ranking; a bookmark either matches every active constraint or it
//! is dropped.

use crate::types::{Bookmark, FilterCriteria};

pub fn filter(bookmarks: &[Bookmark], criteria: &FilterCriteria) -> Vec<Bookmark> {
    let stage: Vec<&Bookmark> = bookmarks.iter().collect();
    let stage = by_id(stage, &criteria.id);
    let stage = by_url(stage, &criteria.url);
    let stage = by_tags(stage, &criteria.tags);
    stage.into_iter().cloned().collect()
}

fn by_id<'a>(input: Vec<&'a Bookmark>, id: &str) -> Vec<&'a Bookmark> {
    if id.is_empty() {
        return input;
    }
    let needle = id.to_lowercase();
    input
        .into_iter()
        .filter(|b| b.id.to_lowercase().contains(&needle))
        .collect()
}

fn by_url<'a>(input: Vec<&'a Bookmark>, url: &str) -> Vec<&'a Bookmark> {
    if url.is_empty() {
        return input;
    }
    let needle = url.to_lowercase();
    input
        .into_iter()
        .filter(|b| b.url.to_lowercase().contains(&needle))
        .collect()
}

fn by_tags<'a>(input: Vec<&'a Bookmark>, tags: &[String]) -> Vec<&'a Bookmark> {
    if tags.is_empty() {
        return input;
    }
    input.into_iter().filter(|b| b.has_all_tags(tags)).collect()
}
