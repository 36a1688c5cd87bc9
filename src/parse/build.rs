use serde_json::{Map, Value};

use super::tree::{Node, Tree, ROOT};
use crate::options::Options;

pub fn construct(tree: &Tree, options: &Options) -> Value {
    construct_node(tree, ROOT, options)
}

fn construct_node(tree: &Tree, id: usize, options: &Options) -> Value {
    let node = tree.node(id);
    match &node.value {
        Some(value) => {
            if options.summarize_leaf_values && node.children.is_empty() {
                return value.clone();
            }
            let mut map = Map::new();
            map.insert(options.value_key.clone(), value.clone());
            fill_children(tree, node, options, &mut map, false);
            Value::Object(map)
        }
        None => {
            let mut map = Map::new();
            fill_children(tree, node, options, &mut map, true);
            Value::Object(map)
        }
    }
}

// A valued node takes its named children as direct entries; a value-less
// node groups them into per-name arrays in first-occurrence order. Attribute
// children fold into the parent either way and are never recursed into.
fn fill_children(
    tree: &Tree,
    node: &Node,
    options: &Options,
    map: &mut Map<String, Value>,
    group: bool,
) {
    for &child_id in &node.children {
        let child = tree.node(child_id);
        if child.is_attribute {
            map.insert(
                format!("{}{}", options.attribute_prefix, child.name),
                child.value.clone().unwrap_or(Value::Bool(true)),
            );
        } else if child.name.is_empty() {
            // bare value line: overwrites the node's own value slot
            map.insert(
                options.value_key.clone(),
                child.value.clone().unwrap_or(Value::Null),
            );
        } else if group {
            let constructed = construct_node(tree, child_id, options);
            let slot = map
                .entry(child.name.to_string())
                .or_insert_with(|| Value::Array(Vec::new()));
            match slot {
                Value::Array(items) => items.push(constructed),
                other => *other = Value::Array(vec![constructed]),
            }
        } else {
            let constructed = construct_node(tree, child_id, options);
            map.insert(child.name.to_string(), constructed);
        }
    }
}
