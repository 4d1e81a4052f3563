#![deny(warnings)]

/// Concrete syntax tree built by the parser.
///
/// A `Node` is labeled with the rule that produced it and holds the matched
/// sub-results in order: nested `Node`s for non-terminals and `Leaf`s for the
/// terminal tokens consumed along the way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tree {
    // "+"
    Leaf(String),
    // ("expression", [Node("term", ...), Node("sumop", [Leaf("+")]), ...])
    Node(String, Vec<Tree>),
}

impl Tree {
    /// Rule name for nodes, `None` for terminal leaves.
    pub fn label(&self) -> Option<&str> {
        match self {
            Tree::Node(label, _) => Some(label),
            Tree::Leaf(_) => None,
        }
    }

    pub fn children(&self) -> &[Tree] {
        match self {
            Tree::Node(_, children) => children,
            Tree::Leaf(_) => &[],
        }
    }

    /// Terminal tokens in input order.
    pub fn leaves(&self) -> Vec<&str> {
        let mut out = Vec::new();
        // explicit stack, children pushed reversed to pop them in order
        let mut pending = vec![self];
        while let Some(tree) = pending.pop() {
            match tree {
                Tree::Leaf(token) => out.push(token.as_str()),
                Tree::Node(_, children) => pending.extend(children.iter().rev()),
            }
        }
        out
    }

    /// The tokens this tree was parsed from, concatenated.
    pub fn text(&self) -> String {
        self.leaves().concat()
    }

    /// Indented one-node-per-line rendering for humans.
    pub fn stringify(&self, nest: usize) -> String {
        let pfx = "  ".repeat(nest);
        match self {
            Tree::Leaf(token) => format!("{}{:?}", pfx, token),
            Tree::Node(label, children) => {
                let mut out = format!("{}{}", pfx, label);
                for child in children {
                    out += "\n";
                    out += &child.stringify(nest + 1);
                }
                out
            }
        }
    }
}
