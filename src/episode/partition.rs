// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// Number of episodes highlighted as latest releases
pub const LATEST_COUNT: usize = 2;

/// Episodes split into the highlighted latest releases and the rest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<T> {
    pub latest: Vec<T>,
    pub remaining: Vec<T>,
}

impl<T> Partition<T> {
    /// Total number of items across both groups
    pub fn len(&self) -> usize {
        self.latest.len() + self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.latest.is_empty() && self.remaining.is_empty()
    }

    /// Iterate over all items in their original order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.latest.iter().chain(self.remaining.iter())
    }
}

/// Split an ordered list after the first [`LATEST_COUNT`] items
pub fn partition<T>(mut items: Vec<T>) -> Partition<T> {
    let split_at = items.len().min(LATEST_COUNT);
    let remaining = items.split_off(split_at);

    Partition {
        latest: items,
        remaining,
    }
}
