use serde_json::Value;
use smallvec::SmallVec;
use smol_str::SmolStr;

use super::scan::LineRecord;
use crate::{Error, Result};

pub const ROOT: usize = 0;

#[derive(Debug)]
pub struct Node {
    pub depth: isize,
    pub is_attribute: bool,
    pub name: SmolStr,
    pub value: Option<Value>,
    pub line: usize,
    pub children: Vec<usize>,
}

impl Node {
    fn root() -> Self {
        Node {
            depth: -1,
            is_attribute: false,
            name: SmolStr::default(),
            value: None,
            line: 0,
            children: Vec::new(),
        }
    }

    fn from_record(record: LineRecord) -> Self {
        Node {
            depth: record.indent as isize,
            is_attribute: record.is_attribute,
            name: record.name,
            value: record.value,
            line: record.line,
            children: Vec::new(),
        }
    }
}

// Arena of nodes; index 0 is a synthetic root one level above depth 0, never
// present in output.
#[derive(Debug)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    pub fn build(records: Vec<LineRecord>) -> Result<Tree> {
        let mut nodes = Vec::with_capacity(records.len() + 1);
        nodes.push(Node::root());

        // Stack of currently open nodes. The root is never popped: every
        // pop condition stops at depth -1.
        let mut stack: SmallVec<[usize; 16]> = SmallVec::new();
        stack.push(ROOT);

        for record in records {
            let depth = record.indent as isize;
            let top_depth = nodes[top(&stack)].depth;
            let diff = depth - top_depth;

            if diff > 1 {
                return Err(Error::Indentation {
                    line: record.line,
                    found: record.indent,
                    max: (top_depth + 1) as usize,
                });
            }
            if diff == 0 {
                // sibling: close the previous one
                stack.pop();
            } else if diff < 0 {
                while nodes[top(&stack)].depth + 1 > depth {
                    stack.pop();
                }
            }

            let parent = top(&stack);
            let id = nodes.len();
            nodes.push(Node::from_record(record));
            nodes[parent].children.push(id);
            stack.push(id);
        }

        Ok(Tree { nodes })
    }

    pub fn node(&self, id: usize) -> &Node {
        &self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }
}

fn top(stack: &SmallVec<[usize; 16]>) -> usize {
    stack.last().copied().unwrap_or(ROOT)
}
