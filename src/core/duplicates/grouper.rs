//! Groups paths by content digest, keeping first-seen order.

use super::DuplicateGroup;
use crate::core::hasher::ContentDigest;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Insertion-ordered digest -> paths accumulator
#[derive(Debug, Default)]
pub struct DigestGrouper {
    index: HashMap<ContentDigest, usize>,
    buckets: Vec<(ContentDigest, Vec<PathBuf>)>,
}

impl DigestGrouper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a hashed file
    pub fn insert(&mut self, digest: ContentDigest, path: PathBuf) {
        match self.index.get(&digest) {
            Some(&position) => self.buckets[position].1.push(path),
            None => {
                self.index.insert(digest.clone(), self.buckets.len());
                self.buckets.push((digest, vec![path]));
            }
        }
    }

    /// Number of distinct digests seen
    pub fn distinct(&self) -> usize {
        self.buckets.len()
    }

    /// Groups with two or more paths, in first-seen order
    pub fn into_duplicates(self) -> Vec<DuplicateGroup> {
        self.buckets
            .into_iter()
            .filter(|(_, paths)| paths.len() > 1)
            .map(|(digest, paths)| {
                let file_size_bytes = match fs::metadata(&paths[0]) {
                    Ok(metadata) => metadata.len(),
                    Err(e) => {
                        tracing::warn!(
                            path = %paths[0].display(),
                            error = %e,
                            "could not read size, reporting 0 reclaimable bytes"
                        );
                        0
                    }
                };
                DuplicateGroup {
                    digest,
                    paths,
                    file_size_bytes,
                }
            })
            .collect()
    }
}
