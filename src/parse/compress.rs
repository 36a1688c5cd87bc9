use serde_json::{Map, Value};

use crate::options::Options;

pub fn compress(value: Value, options: &Options) -> Value {
    if !options.collapse_single_value_objects && !options.collapse_singleton_arrays {
        return value;
    }
    compress_value(value, options)
}

// Children collapse before their parent, so every decision here sees
// already-compressed descendants.
fn compress_value(value: Value, options: &Options) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, entry) in map {
                out.insert(key, compress_entry(entry, options));
            }
            if options.collapse_single_value_objects && out.len() == 1 {
                if let Some(inner) = out.remove(options.value_key.as_str()) {
                    return inner;
                }
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| compress_value(item, options))
                .collect(),
        ),
        scalar => scalar,
    }
}

fn compress_entry(entry: Value, options: &Options) -> Value {
    let entry = compress_value(entry, options);
    if options.collapse_singleton_arrays {
        unwrap_singletons(entry)
    } else {
        entry
    }
}

// Nested singleton arrays (possible through literal array values) unwrap
// all the way down; a second pass over the result is a no-op.
fn unwrap_singletons(mut entry: Value) -> Value {
    loop {
        match entry {
            Value::Array(mut items) if items.len() == 1 => {
                entry = items.remove(0);
            }
            other => return other,
        }
    }
}
