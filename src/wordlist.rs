use crate::labelset::LetterSet;
use crate::tiles::{letters_of, Letter};
use crate::Error;
use log::{debug, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::read_to_string;

/// Handle to a node in a [`WordIndex`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node in the prefix tree. The child node ids are kept in alphabetic order,
/// so the position of a child in `next` is the rank of its letter in `children`.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct Node {
    children: LetterSet,
    next: Vec<u32>,
    terminal: bool,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// A prefix tree that holds all the playable words.
///
/// Words are stored upper case; lookups are case insensitive.
/// Once built the index is only read, so one instance can be shared by
/// reference between any number of concurrent solves.
///
/// ## Examples
/// ```
/// use crossplay_solver::{Error, WordIndex};
/// let index = WordIndex::from_words(&["rust", "rest", "rusty"])?;
/// assert!(index.contains("Rust"));
/// assert!(!index.contains("rus"));
/// assert_eq!(index.len(), 3);
/// # Ok::<(), Error>(())
/// ```
pub struct WordIndex {
    nodes: Vec<Node>,
    word_count: usize,
    /// Path of the wordfile used to build the index.
    /// Empty if the index is not built from a file.
    wordfile: String,
}

impl Default for WordIndex {
    fn default() -> Self {
        WordIndex::new()
    }
}

impl fmt::Display for WordIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<WordIndex: {} words, {} nodes from '{}'>",
            self.word_count,
            self.nodes.len(),
            self.wordfile
        )
    }
}

impl WordIndex {
    /// An index without any words.
    pub fn new() -> WordIndex {
        WordIndex {
            nodes: vec![Node::default()],
            word_count: 0,
            wordfile: String::new(),
        }
    }

    /// Build an index from a list of words.
    /// ## Errors
    /// If a word contains anything but ascii letters.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Result<WordIndex, Error> {
        let mut index = WordIndex::new();
        for word in words {
            index.insert(word.as_ref())?;
        }
        Ok(index)
    }

    /// Read the index from a file. The file must be encoded in utf-8 and
    /// have one word per line. Empty lines and lines that are not a plain
    /// ascii word are skipped.
    /// ## Errors
    /// Fails if the file can not be read.
    pub fn from_file(wordfile: &str) -> Result<WordIndex, Error> {
        let text = read_to_string(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let mut index = WordIndex::new();
        let mut skipped = 0;
        for word in text.lines().map(str::trim).filter(|word| !word.is_empty()) {
            if index.insert(word).is_err() {
                skipped += 1;
            }
        }
        if skipped > 0 {
            warn!("{}: skipped {} words with invalid letters", wordfile, skipped);
        }
        index.wordfile = String::from(wordfile);
        debug!("{}", index);
        Ok(index)
    }

    #[cfg(feature = "bincode")]
    /// Deserialize the index from a bincoded file.
    /// ## Errors
    /// - If the file can not be read.
    /// - If the contents can not be deserialized
    pub fn deserialize_from(wordfile: &str) -> Result<WordIndex, Error> {
        use std::fs::File;
        use std::io::BufReader;
        let file = File::open(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let reader = BufReader::new(file);
        let mut index: WordIndex = bincode::deserialize_from(reader)
            .map_err(|_| Error::WordfileDeserializeError(String::from(wordfile)))?;
        index.wordfile = String::from(wordfile);
        Ok(index)
    }

    #[cfg(feature = "bincode")]
    /// Serialize the index to a bincoded file.
    /// ## Errors
    /// If the file can not be written.
    pub fn serialize_to(&self, path: &str) -> Result<(), Error> {
        use std::fs::File;
        use std::io::BufWriter;
        let file = File::create(path).map_err(|source| Error::ReadError {
            path: String::from(path),
            source,
        })?;
        bincode::serialize_into(BufWriter::new(file), self)
            .map_err(|_| Error::WordfileSerializeError(String::from(path)))
    }

    /// Add `word` to the index. Returns `true` if the word was not present yet.
    /// ## Errors
    /// If the word contains anything but ascii letters.
    pub fn insert(&mut self, word: &str) -> Result<bool, Error> {
        let letters = letters_of(word)?;
        Ok(self.insert_letters(&letters))
    }

    /// Add a word given as letters. Returns `true` if the word was not present yet.
    pub fn insert_letters(&mut self, word: &[Letter]) -> bool {
        let mut i = 0;
        for &letter in word {
            i = match self.nodes[i].children.index_of(letter) {
                Some(pos) => self.nodes[i].next[pos] as usize,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::default());
                    let node = &mut self.nodes[i];
                    let pos = node.children.rank(letter);
                    node.children.insert(letter);
                    node.next.insert(pos, child as u32);
                    child
                }
            };
        }
        let node = &mut self.nodes[i];
        if node.terminal {
            return false;
        }
        node.terminal = true;
        self.word_count += 1;
        true
    }

    /// Returns true if `word` is in the index. Words with characters outside
    /// the alphabet are never present.
    pub fn contains(&self, word: &str) -> bool {
        word.chars()
            .map(Letter::from_char)
            .try_fold(self.root(), |node, letter| self.child(node, letter?))
            .map_or(false, |node| self.is_terminal(node))
    }

    /// Returns true if the word spelled by `letters` is in the index.
    pub fn contains_letters<I: IntoIterator<Item = Letter>>(&self, letters: I) -> bool {
        self.follow(self.root(), letters)
            .map_or(false, |node| self.is_terminal(node))
    }

    /// The node reached by following `prefix` from the root, if any word starts with it.
    pub fn node(&self, prefix: &str) -> Option<NodeId> {
        prefix
            .chars()
            .map(Letter::from_char)
            .try_fold(self.root(), |node, letter| self.child(node, letter?))
    }

    /// The node reached by following `letters` down from `node`, if any.
    pub fn follow<I: IntoIterator<Item = Letter>>(&self, node: NodeId, letters: I) -> Option<NodeId> {
        letters
            .into_iter()
            .try_fold(node, |node, letter| self.child(node, letter))
    }

    /// The root node, matching the empty prefix.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Get the child of `node` for `letter` if present.
    #[inline]
    pub fn child(&self, node: NodeId, letter: Letter) -> Option<NodeId> {
        let node = &self.nodes[node.index()];
        node.children
            .index_of(letter)
            .map(|pos| NodeId(node.next[pos]))
    }

    /// Returns true if a complete word ends at `node`.
    #[inline]
    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.nodes[node.index()].terminal
    }

    /// The letters that continue the prefix at `node`.
    pub fn child_letters(&self, node: NodeId) -> LetterSet {
        self.nodes[node.index()].children
    }

    /// Iterate over the children of `node` in alphabetic order.
    pub fn children(&self, node: NodeId) -> impl Iterator<Item = (Letter, NodeId)> + '_ {
        let node = &self.nodes[node.index()];
        node.children
            .iter()
            .zip(node.next.iter().map(|&i| NodeId(i)))
    }

    /// The number of words in the index
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// The number of nodes in the prefix tree, the root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
