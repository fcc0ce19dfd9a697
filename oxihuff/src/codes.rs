//! Code table: symbol → bit-sequence mapping derived from the tree.

use crate::freq::ALPHABET_SIZE;
use crate::tree::HuffNode;

/// Per-symbol code bits, derived from root-to-leaf paths.
///
/// Left edges contribute `false` (0), right edges `true` (1). Symbols
/// without a leaf in the tree keep an empty entry and never appear in a
/// well-formed payload. A single-leaf tree maps its one symbol to the
/// empty code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<Vec<bool>>,
}

impl CodeTable {
    /// Derive the code table from a tree by depth-first traversal.
    pub fn from_tree(tree: &HuffNode) -> Self {
        let mut codes = vec![Vec::new(); ALPHABET_SIZE];
        let mut prefix = Vec::new();
        collect_codes(tree, &mut prefix, &mut codes);
        Self { codes }
    }

    /// The code bits for a symbol; empty for symbols absent from the tree.
    pub fn code(&self, symbol: u8) -> &[bool] {
        &self.codes[symbol as usize]
    }
}

fn collect_codes(node: &HuffNode, prefix: &mut Vec<bool>, codes: &mut [Vec<bool>]) {
    match node {
        HuffNode::Leaf(symbol) => {
            codes[*symbol as usize] = prefix.clone();
        }
        HuffNode::Internal(left, right) => {
            prefix.push(false);
            collect_codes(left, prefix, codes);
            prefix.pop();

            prefix.push(true);
            collect_codes(right, prefix, codes);
            prefix.pop();
        }
    }
}
