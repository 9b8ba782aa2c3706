use crate::tag::WordTag;

/// Radix prefix tree over tagged lexicon words, stored as an arena.
///
/// Nodes live in one `Vec` and reference children by index, so the tree is
/// plain owned data with no pointer juggling. Built once at startup from
/// static tables and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct WordTrie {
    nodes: Vec<Node>,
}

#[derive(Debug, Clone)]
struct Node {
    /// Prefix segment, not a full word; the concatenation of fragments from
    /// the root down is the stored word wherever `tag` is non-empty.
    fragment: String,
    tag: WordTag,
    children: Vec<usize>,
}

const ROOT: usize = 0;

impl WordTrie {
    pub fn new() -> Self {
        WordTrie {
            nodes: vec![Node {
                fragment: String::new(),
                tag: WordTag::empty(),
                children: Vec::new(),
            }],
        }
    }

    pub fn from_entries(entries: &[(&str, WordTag)]) -> Self {
        let mut trie = WordTrie::new();
        for &(word, tag) in entries {
            trie.insert(word, tag);
        }
        trie
    }

    fn push_node(&mut self, fragment: String, tag: WordTag, children: Vec<usize>) -> usize {
        self.nodes.push(Node {
            fragment,
            tag,
            children,
        });
        self.nodes.len() - 1
    }

    pub fn insert(&mut self, word: &str, tag: WordTag) {
        self.insert_at(ROOT, word, tag);
    }

    fn insert_at(&mut self, id: usize, rest: &str, tag: WordTag) {
        let children = self.nodes[id].children.clone();
        for child in children {
            let fragment = self.nodes[child].fragment.clone();
            let common = common_prefix_len(&fragment, rest);
            if common == 0 {
                continue;
            }
            if common == fragment.len() {
                if common == rest.len() {
                    // Exact node: merge roles.
                    self.nodes[child].tag |= tag;
                } else {
                    self.insert_at(child, &rest[common..], tag);
                }
                return;
            }
            // Partial overlap: split the child at the common prefix.
            let lower_tag = self.nodes[child].tag;
            let lower_children = std::mem::take(&mut self.nodes[child].children);
            let lower = self.push_node(fragment[common..].to_string(), lower_tag, lower_children);
            self.nodes[child].fragment.truncate(common);
            self.nodes[child].children = vec![lower];
            if common == rest.len() {
                self.nodes[child].tag = tag;
            } else {
                self.nodes[child].tag = WordTag::empty();
                let leaf = self.push_node(rest[common..].to_string(), tag, Vec::new());
                self.nodes[child].children.push(leaf);
            }
            return;
        }
        // No child shares a prefix with `rest`.
        let leaf = self.push_node(rest.to_string(), tag, Vec::new());
        self.nodes[id].children.push(leaf);
    }

    /// All stored words matching any bit of `tag`, skipping every subtree
    /// whose node carries a bit of `exclude`. Exclusion is inherited
    /// downward and checked before inclusion; an empty result is a normal
    /// value, never an error.
    pub fn lookup(&self, tag: WordTag, exclude: WordTag) -> Vec<String> {
        let mut out = Vec::new();
        self.collect(ROOT, "", tag, exclude, &mut out);
        out
    }

    fn collect(&self, id: usize, base: &str, tag: WordTag, exclude: WordTag, out: &mut Vec<String>) {
        let node = &self.nodes[id];
        if node.tag.intersects(exclude) {
            return;
        }
        let text = format!("{base}{}", node.fragment);
        if node.tag.intersects(tag) {
            out.push(text.clone());
        }
        for &child in &node.children {
            self.collect(child, &text, tag, exclude, out);
        }
    }

    /// Number of stored words (nodes with a non-empty tag).
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| !n.tag.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for WordTrie {
    fn default() -> Self {
        WordTrie::new()
    }
}

fn common_prefix_len(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .take_while(|&((_, ca), cb)| ca == cb)
        .last()
        .map(|((i, ca), _)| i + ca.len_utf8())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut v: Vec<String>) -> Vec<String> {
        v.sort();
        v
    }

    #[test]
    fn insert_and_lookup_roundtrip() {
        let trie = WordTrie::from_entries(&[
            ("damn", WordTag::EXCLAMATIONS),
            ("damning", WordTag::DEFAULT),
            ("dog", WordTag::FILLER | WordTag::END),
        ]);
        assert_eq!(trie.len(), 3);
        assert_eq!(
            sorted(trie.lookup(WordTag::FILLER, WordTag::empty())),
            vec!["damning", "dog"]
        );
        assert_eq!(
            trie.lookup(WordTag::EXCLAMATION, WordTag::empty()),
            vec!["damn"]
        );
    }

    #[test]
    fn prefix_split_preserves_words() {
        // "dam" arrives after "damn": forces a split both ways around.
        for order in [
            &[("damn", WordTag::DEFAULT), ("dam", WordTag::DEFAULT)],
            &[("dam", WordTag::DEFAULT), ("damn", WordTag::DEFAULT)],
        ] {
            let trie = WordTrie::from_entries(order);
            assert_eq!(
                sorted(trie.lookup(WordTag::START, WordTag::empty())),
                vec!["dam", "damn"]
            );
        }
    }

    #[test]
    fn divergent_words_split_into_branches() {
        let trie = WordTrie::from_entries(&[
            ("slut", WordTag::DEFAULT),
            ("slap", WordTag::DEFAULT),
            ("snail", WordTag::DEFAULT),
        ]);
        assert_eq!(
            sorted(trie.lookup(WordTag::START, WordTag::empty())),
            vec!["slap", "slut", "snail"]
        );
    }

    #[test]
    fn exclusion_is_inherited_downward() {
        // "ho" is slang; "hoe" hangs below it in the tree and inherits the
        // exclusion even though its own entry is clean.
        let trie = WordTrie::from_entries(&[
            ("ho", WordTag::DEFAULT | WordTag::MISSPELLING),
            ("hoe", WordTag::DEFAULT),
            ("hag", WordTag::DEFAULT),
        ]);
        assert_eq!(
            sorted(trie.lookup(WordTag::START, WordTag::empty())),
            vec!["hag", "ho", "hoe"]
        );
        assert_eq!(
            trie.lookup(WordTag::START, WordTag::MISSPELLING),
            vec!["hag"]
        );
    }

    #[test]
    fn lookup_never_leaks_excluded_roles() {
        let trie = WordTrie::from_entries(&[
            ("proper", WordTag::DEFAULT),
            ("proud", WordTag::DEFAULT | WordTag::POSITIVE),
            ("fugly", WordTag::DEFAULT | WordTag::MISSPELLING),
        ]);
        let exclude = WordTag::MISSPELLING | WordTag::POSITIVE;
        for word in trie.lookup(WordTag::DEFAULT, exclude) {
            assert_eq!(word, "proper");
        }
    }

    #[test]
    fn empty_lookup_is_a_value() {
        let trie = WordTrie::from_entries(&[("word", WordTag::DEFAULT)]);
        assert!(trie.lookup(WordTag::SPLIT, WordTag::empty()).is_empty());
    }
}
