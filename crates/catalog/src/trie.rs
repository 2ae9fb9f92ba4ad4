//! ASCII prefix tree over movie titles.
//!
//! Each node owns up to 128 children, one per ASCII byte value. Titles are
//! assumed ASCII; bytes outside that range are silently dropped from the
//! path, both on insert and on search. The tree is built once during the
//! load phase and only read afterwards. Teardown is the plain owned drop:
//! every node is exclusively owned by its parent, so there is nothing to
//! reference-count.

use crate::types::MovieId;

const FANOUT: usize = 128;

#[derive(Debug)]
struct TrieNode {
    /// At least one title ends exactly at this node
    terminal: bool,
    /// Ids of all movies whose title ends here (duplicate titles stack up)
    movie_ids: Vec<MovieId>,
    children: [Option<Box<TrieNode>>; FANOUT],
}

impl TrieNode {
    fn new() -> Self {
        Self {
            terminal: false,
            movie_ids: Vec::new(),
            children: std::array::from_fn(|_| None),
        }
    }
}

/// Prefix index over titles, mapping every title to the movie ids bearing it.
#[derive(Debug)]
pub struct TitleTrie {
    root: TrieNode,
}

impl TitleTrie {
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
        }
    }

    /// Indexes `title` under `movie_id`, creating nodes as needed.
    ///
    /// Non-ASCII bytes are skipped, not rejected: the path is built from the
    /// remaining bytes only.
    pub fn insert(&mut self, title: &str, movie_id: MovieId) {
        let mut node = &mut self.root;

        for byte in title.bytes().filter(u8::is_ascii) {
            node = node.children[byte as usize].get_or_insert_with(|| Box::new(TrieNode::new()));
        }

        node.terminal = true;
        node.movie_ids.push(movie_id);
    }

    /// Collects every movie id whose title starts with `prefix`.
    ///
    /// Non-ASCII bytes in the prefix are skipped with the same rule as
    /// `insert`; each kept byte must have a matching child or the result is
    /// empty. On a full match the subtree below the prefix node is walked
    /// depth-first in increasing byte order, so the output order is
    /// deterministic but unrelated to any rating criterion — callers
    /// re-sort.
    pub fn search_prefix(&self, prefix: &str) -> Vec<MovieId> {
        let mut node = &self.root;

        for byte in prefix.bytes().filter(u8::is_ascii) {
            match &node.children[byte as usize] {
                Some(child) => node = child,
                None => return Vec::new(),
            }
        }

        let mut out = Vec::new();
        collect(node, &mut out);
        out
    }
}

impl Default for TitleTrie {
    fn default() -> Self {
        Self::new()
    }
}

/// Depth-first collection of all terminal movie ids under `node`.
fn collect(node: &TrieNode, out: &mut Vec<MovieId>) {
    if node.terminal {
        out.extend_from_slice(&node.movie_ids);
    }
    for child in node.children.iter().flatten() {
        collect(child, out);
    }
}
