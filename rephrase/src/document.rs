// rephrase/src/document.rs
//! An in-memory element/text tree standing in for the live structured
//! document a deployment would transform.
//!
//! The tree implements both collaborator traits from the core:
//! [`TextChunkSource`] enumerates text-bearing leaves, rejecting text
//! inside non-text containers (`script`, `style`) and inside spans that
//! were already transformed; [`SegmentSink`] materializes a segment
//! sequence back into the tree, replacing one text node with plain text
//! runs and annotated `span` elements that future traversals skip.
//!
//! Tests inject this model in place of a real document; the watcher drives
//! it the same way either way.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::debug;

use rephrase_core::tooltip::{format_tooltip, DEFAULT_TOOLTIP_FORMAT};
use rephrase_core::{Segment, SegmentSink, TextChunk, TextChunkSource};

/// Container tags whose text content is never matched.
const NON_TEXT_TAGS: &[&str] = &["script", "style"];

/// Class-equivalent marker carried by spans the engine produced.
pub const REPLACED_TAG: &str = "span";

pub type NodeId = usize;

#[derive(Debug, Clone)]
pub enum NodeData {
    Element(ElementData),
    Text(String),
}

#[derive(Debug, Clone, Default)]
pub struct ElementData {
    pub tag: String,
    /// True for spans produced by materialization; traversal skips their
    /// contents so reprocessing a finished tree yields no work.
    pub replaced: bool,
    /// Hover annotation showing the original wording.
    pub tooltip: Option<String>,
    /// The original text the span stands for.
    pub original: Option<String>,
}

#[derive(Debug)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    data: NodeData,
}

/// A minimal hierarchical document: one root element, arbitrary nesting of
/// elements and text leaves. Node ids are stable for the document's
/// lifetime; detached nodes keep their id but leave the tree.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
    tooltip_format: String,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let root_node = Node {
            parent: None,
            children: Vec::new(),
            data: NodeData::Element(ElementData {
                tag: "body".to_string(),
                ..Default::default()
            }),
        };
        Self {
            nodes: vec![root_node],
            root: 0,
            tooltip_format: DEFAULT_TOOLTIP_FORMAT.to_string(),
        }
    }

    pub fn with_tooltip_format(mut self, format: impl Into<String>) -> Self {
        self.tooltip_format = format.into();
        self
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Appends a child element under `parent` and returns its id.
    pub fn add_element(&mut self, parent: NodeId, tag: impl Into<String>) -> NodeId {
        self.push_node(
            parent,
            NodeData::Element(ElementData {
                tag: tag.into(),
                ..Default::default()
            }),
        )
    }

    /// Appends a text leaf under `parent` and returns its id.
    pub fn add_text(&mut self, parent: NodeId, content: impl Into<String>) -> NodeId {
        self.push_node(parent, NodeData::Text(content.into()))
    }

    fn push_node(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            parent: Some(parent),
            children: Vec::new(),
            data,
        });
        self.nodes[parent].children.push(id);
        id
    }

    pub fn text_of(&self, id: NodeId) -> Option<&str> {
        match &self.nodes.get(id)?.data {
            NodeData::Text(content) => Some(content),
            NodeData::Element(_) => None,
        }
    }

    pub fn element_of(&self, id: NodeId) -> Option<&ElementData> {
        match &self.nodes.get(id)?.data {
            NodeData::Element(data) => Some(data),
            NodeData::Text(_) => None,
        }
    }

    /// All replaced spans currently in the tree, in document order.
    pub fn replaced_spans(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            if let NodeData::Element(data) = &self.nodes[id].data {
                if data.replaced {
                    out.push(id);
                }
            }
            for &child in self.nodes[id].children.iter().rev() {
                stack.push(child);
            }
        }
        out
    }

    /// Flattens the text a reader would see: every text leaf in document
    /// order, excluding script/style content.
    pub fn visible_text(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            match &self.nodes[id].data {
                NodeData::Text(content) => out.push_str(content),
                NodeData::Element(data) => {
                    if NON_TEXT_TAGS.contains(&data.tag.as_str()) {
                        continue;
                    }
                    for &child in self.nodes[id].children.iter().rev() {
                        stack.push(child);
                    }
                }
            }
        }
        out
    }
}

/// Depth-first, lazy traversal over text-bearing leaves. Non-text
/// containers and already-replaced spans are rejected wholesale: the
/// iterator never descends into them.
pub struct ChunkIter<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for ChunkIter<'a> {
    type Item = TextChunk;

    fn next(&mut self) -> Option<TextChunk> {
        while let Some(id) = self.stack.pop() {
            match &self.doc.nodes[id].data {
                NodeData::Text(content) => {
                    if !content.is_empty() {
                        return Some(TextChunk::new(id.to_string(), content.clone()));
                    }
                }
                NodeData::Element(data) => {
                    if data.replaced || NON_TEXT_TAGS.contains(&data.tag.as_str()) {
                        continue;
                    }
                    for &child in self.doc.nodes[id].children.iter().rev() {
                        self.stack.push(child);
                    }
                }
            }
        }
        None
    }
}

impl TextChunkSource for Document {
    fn chunks(&self) -> Box<dyn Iterator<Item = TextChunk> + '_> {
        Box::new(ChunkIter {
            doc: self,
            stack: vec![self.root],
        })
    }
}

impl SegmentSink for Document {
    /// Replaces the addressed text node with the materialized segment run:
    /// plain text nodes for Literal segments, annotated replaced spans
    /// (tooltip + original) for Replaced segments.
    fn materialize(&mut self, chunk_id: &str, segments: &[Segment]) -> Result<()> {
        let id: NodeId = chunk_id
            .parse()
            .with_context(|| format!("Invalid chunk id '{}'", chunk_id))?;

        let node = self
            .nodes
            .get(id)
            .ok_or_else(|| anyhow!("Unknown chunk id '{}'", chunk_id))?;
        if !matches!(node.data, NodeData::Text(_)) {
            return Err(anyhow!("Chunk id '{}' does not address a text node", chunk_id));
        }
        let parent = node
            .parent
            .ok_or_else(|| anyhow!("Chunk id '{}' has no parent to splice into", chunk_id))?;

        let mut replacement_ids = Vec::with_capacity(segments.len());
        for segment in segments {
            match segment {
                Segment::Literal(text) => {
                    let text_id = self.nodes.len();
                    self.nodes.push(Node {
                        parent: Some(parent),
                        children: Vec::new(),
                        data: NodeData::Text(text.clone()),
                    });
                    replacement_ids.push(text_id);
                }
                Segment::Replaced { original, display, rule_name } => {
                    let tooltip = format_tooltip(&self.tooltip_format, original, display, rule_name)?;
                    let span_id = self.nodes.len();
                    self.nodes.push(Node {
                        parent: Some(parent),
                        children: Vec::new(),
                        data: NodeData::Element(ElementData {
                            tag: REPLACED_TAG.to_string(),
                            replaced: true,
                            tooltip: Some(tooltip),
                            original: Some(original.clone()),
                        }),
                    });
                    let text_id = self.nodes.len();
                    self.nodes.push(Node {
                        parent: Some(span_id),
                        children: Vec::new(),
                        data: NodeData::Text(display.clone()),
                    });
                    self.nodes[span_id].children.push(text_id);
                    replacement_ids.push(span_id);
                }
            }
        }

        let position = self.nodes[parent]
            .children
            .iter()
            .position(|&child| child == id)
            .ok_or_else(|| anyhow!("Chunk id '{}' detached from its parent", chunk_id))?;
        self.nodes[parent]
            .children
            .splice(position..position + 1, replacement_ids);
        self.nodes[id].parent = None;

        debug!("Materialized {} segments in place of node {}.", segments.len(), id);
        Ok(())
    }
}
