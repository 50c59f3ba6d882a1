//! Syntax tree data model consumed by the lint rules.
//!
//! The host parser owns the real AST; it lowers the nodes the rules care
//! about into this arena tree and keeps everything else as [`NodeKind::Other`].
//! Each variant of [`NodeKind`] exposes exactly the fields that are valid for
//! it, so rules match on the kind instead of probing nodes for capabilities.
//! Capability queries on the wrong kind of node degrade to a neutral result
//! (`None`, `false`, or an empty slice) rather than failing.

/// Byte-offset range into the original source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Handle to a node inside a [`SyntaxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Structural classification of a syntax node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Plain string literal. `value` is `None` when the literal's bytes do
    /// not decode as UTF-8; every content predicate treats that as
    /// "no content".
    StringLiteral { value: Option<String> },
    /// Interpolated string. Children alternate between literal segments
    /// ([`NodeKind::StringLiteral`]) and embedded expression nodes.
    CompositeString,
    /// Call/send expression. The arguments are the node's children; the
    /// receiver, when one is written in the source, is carried as its
    /// textual name (enough for decorator-receiver checks and the
    /// `Type.new(...)` constructor unwrap).
    Call {
        callee: String,
        receiver: Option<String>,
    },
    /// Reference to a constant / type name.
    ConstantRef { name: String },
    /// Index/subscript expression (`container[key]`). Children are the
    /// receiver followed by the index expressions.
    ArrayAccess,
    /// Binary operator expression. Children are the operands.
    BinaryOp { operator: String },
    /// Anything the rules do not inspect structurally.
    Other,
}

impl NodeKind {
    pub fn string(value: impl Into<String>) -> Self {
        NodeKind::StringLiteral {
            value: Some(value.into()),
        }
    }

    /// String literal from raw source bytes; non-UTF-8 content yields a
    /// literal with no classifiable text.
    pub fn string_from_bytes(bytes: &[u8]) -> Self {
        NodeKind::StringLiteral {
            value: std::str::from_utf8(bytes).ok().map(str::to_owned),
        }
    }

    pub fn call(callee: impl Into<String>) -> Self {
        NodeKind::Call {
            callee: callee.into(),
            receiver: None,
        }
    }

    pub fn method_call(receiver: impl Into<String>, callee: impl Into<String>) -> Self {
        NodeKind::Call {
            callee: callee.into(),
            receiver: Some(receiver.into()),
        }
    }

    pub fn constant(name: impl Into<String>) -> Self {
        NodeKind::ConstantRef { name: name.into() }
    }

    pub fn binary_op(operator: impl Into<String>) -> Self {
        NodeKind::BinaryOp {
            operator: operator.into(),
        }
    }
}

#[derive(Debug)]
struct NodeData {
    kind: NodeKind,
    span: Span,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// Host-reported "spans more than one line" flag, when available.
    multiline: Option<bool>,
}

/// Arena-backed syntax tree.
///
/// Nodes are added bottom-up: children first, then the parent with its
/// child ids. Attaching a child records the parent back-reference, so the
/// tree is acyclic by construction and every traversal terminates.
#[derive(Debug, Default)]
pub struct SyntaxTree {
    nodes: Vec<NodeData>,
}

impl SyntaxTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with the given children (which must not already have a
    /// parent). Returns the handle of the new node.
    pub fn add(&mut self, kind: NodeKind, span: Span, children: Vec<NodeId>) -> NodeId {
        let id = NodeId(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX));
        for &child in &children {
            debug_assert!(
                self.nodes[child.index()].parent.is_none(),
                "node attached to two parents"
            );
            self.nodes[child.index()].parent = Some(id);
        }
        self.nodes.push(NodeData {
            kind,
            span,
            parent: None,
            children,
            multiline: None,
        });
        id
    }

    /// Leaf-node shorthand.
    pub fn leaf(&mut self, kind: NodeKind, span: Span) -> NodeId {
        self.add(kind, span, Vec::new())
    }

    /// Record the host parser's own multiline-span verdict for a node.
    pub fn set_multiline(&mut self, id: NodeId, multiline: bool) {
        self.nodes[id.index()].multiline = Some(multiline);
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.index()].kind
    }

    pub fn span(&self, id: NodeId) -> Span {
        self.nodes[id.index()].span
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.index()].children
    }

    /// Nodes that have no parent, in insertion order. A lowered file
    /// usually has many roots (one per top-level expression of interest).
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len())
            .map(|i| NodeId(i as u32))
            .filter(|id| self.nodes[id.index()].parent.is_none())
    }

    /// Depth-first preorder walk of a subtree, including `start` itself.
    pub fn subtree(&self, start: NodeId) -> Subtree<'_> {
        Subtree {
            tree: self,
            stack: vec![start],
        }
    }

    // ---- capability queries (graceful on heterogeneous nodes) ----

    /// Literal text content; `None` for non-literals and for literals whose
    /// bytes were not UTF-8-decodable.
    pub fn string_value(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            NodeKind::StringLiteral { value } => value.as_deref(),
            _ => None,
        }
    }

    pub fn callee_name(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            NodeKind::Call { callee, .. } => Some(callee),
            _ => None,
        }
    }

    pub fn receiver_name(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            NodeKind::Call { receiver, .. } => receiver.as_deref(),
            _ => None,
        }
    }

    /// Call arguments; empty for anything that is not a call.
    pub fn arguments(&self, id: NodeId) -> &[NodeId] {
        match self.kind(id) {
            NodeKind::Call { .. } => self.children(id),
            _ => &[],
        }
    }

    pub fn is_call_with_name(&self, id: NodeId, name: &str) -> bool {
        self.callee_name(id) == Some(name)
    }

    /// Host-reported multiline flag; `None` when the host did not supply one.
    pub fn multiline_hint(&self, id: NodeId) -> Option<bool> {
        self.nodes[id.index()].multiline
    }
}

/// Iterator returned by [`SyntaxTree::subtree`].
pub struct Subtree<'a> {
    tree: &'a SyntaxTree,
    stack: Vec<NodeId>,
}

impl Iterator for Subtree<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        let children = self.tree.children(id);
        self.stack.extend(children.iter().rev());
        Some(id)
    }
}
