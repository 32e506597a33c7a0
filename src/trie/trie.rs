use crate::error_handling::Error::EmptyLiteral;
use crate::error_handling::Result;
use indexmap::IndexMap;
use std::fmt::Debug;

// `key` is relative to the parent. Children are keyed by the first byte of their own `key`.
pub struct TrieNode<V> {
    key: Vec<u8>,
    values: Vec<V>,
    children: IndexMap<u8, TrieNode<V>>,
}

// Manual impl: an empty node needs no `V: Default`.
impl<V> Default for TrieNode<V> {
    fn default() -> Self {
        Self {
            key: Vec::new(),
            values: Vec::new(),
            children: IndexMap::new(),
        }
    }
}

impl<V> TrieNode<V> {
    fn new(key: Vec<u8>, values: Vec<V>) -> Self {
        Self {
            key,
            values,
            children: IndexMap::new(),
        }
    }

    pub fn get_key(&self) -> &[u8] {
        &self.key
    }

    pub fn get_values(&self) -> &[V] {
        &self.values
    }

    pub fn find_partial(&self, first_byte: u8) -> Option<&TrieNode<V>> {
        self.children.get(&first_byte)
    }

    pub fn is_terminal(&self) -> bool {
        self.children.is_empty()
    }

    fn set(&mut self, key: &[u8], values: Vec<V>) {
        let first_byte = key[0];
        match self.children.get_mut(&first_byte) {
            Some(slot) => {
                let child = std::mem::take(slot);
                *slot = Self::merge(child, key, values);
            }
            None => {
                self.children
                    .insert(first_byte, TrieNode::new(key.to_vec(), values));
            }
        }
    }

    // Returns the new subtree root. `child.key` and `key` share their first byte.
    fn merge(mut child: TrieNode<V>, key: &[u8], values: Vec<V>) -> TrieNode<V> {
        let same = common_prefix_len(&child.key, key);
        if same == child.key.len() {
            if same == key.len() {
                child.values = values;
            } else {
                child.set(&key[same..], values);
            }
            return child;
        }

        // Divergence inside `child.key`: split it at the common prefix.
        let mut branch = TrieNode::new(key[..same].to_vec(), Vec::new());
        child.key = child.key.split_off(same);
        if same == key.len() {
            branch.values = values;
        } else {
            let rest = &key[same..];
            branch
                .children
                .insert(rest[0], TrieNode::new(rest.to_vec(), values));
        }
        branch.children.insert(child.key[0], child);
        branch
    }

    fn count_registered(&self) -> usize {
        let own = if self.values.is_empty() { 0 } else { 1 };
        own + self
            .children
            .values()
            .map(TrieNode::count_registered)
            .sum::<usize>()
    }

    fn fmt_indented(&self, f: &mut std::fmt::Formatter, depth: usize) -> std::fmt::Result
    where
        V: Debug,
    {
        for (_, child) in &self.children {
            writeln!(
                f,
                "{}{:?} -> {:?}",
                "\t".repeat(depth),
                String::from_utf8_lossy(&child.key),
                child.values
            )?;
            child.fmt_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

fn common_prefix_len(lhs: &[u8], rhs: &[u8]) -> usize {
    lhs.iter().zip(rhs).take_while(|(l, r)| l == r).count()
}

/// A compressed prefix trie (radix tree) mapping byte strings to a list of values.
pub struct PrefixTrie<V> {
    root: TrieNode<V>,
}

impl<V> Default for PrefixTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> PrefixTrie<V> {
    pub fn new() -> Self {
        Self {
            root: TrieNode::default(),
        }
    }

    pub fn root(&self) -> &TrieNode<V> {
        &self.root
    }

    pub fn insert(&mut self, key: impl AsRef<[u8]>, values: Vec<V>) -> Result<()> {
        let key = key.as_ref();
        if key.is_empty() {
            return Err(EmptyLiteral);
        }
        self.root.set(key, values);
        Ok(())
    }

    /// The returned node may be a pure branching point with no values.
    pub fn find_exact(&self, key: impl AsRef<[u8]>) -> Option<&TrieNode<V>> {
        let mut rest = key.as_ref();
        if rest.is_empty() {
            return None;
        }
        let mut node = &self.root;
        while false == rest.is_empty() {
            let child = node.find_partial(rest[0])?;
            if false == rest.starts_with(&child.key) {
                return None;
            }
            rest = &rest[child.key.len()..];
            node = child;
        }
        Some(node)
    }

    pub fn find_partial(&self, first_byte: u8) -> Option<&TrieNode<V>> {
        self.root.find_partial(first_byte)
    }

    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&[V]> {
        self.find_exact(key)
            .map(TrieNode::get_values)
            .filter(|values| false == values.is_empty())
    }

    // Keys with an empty value list are not counted.
    pub fn len(&self) -> usize {
        self.root.count_registered()
    }

    pub fn is_empty(&self) -> bool {
        0 == self.len()
    }
}

impl<V: Debug> Debug for PrefixTrie<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "PrefixTrie(")?;
        self.root.fmt_indented(f, 1)?;
        write!(f, ")")
    }
}
