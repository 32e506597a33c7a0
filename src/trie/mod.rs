mod trie;

pub use trie::PrefixTrie;
pub use trie::TrieNode;
