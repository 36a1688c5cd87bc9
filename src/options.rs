use crate::constants::{DEFAULT_ATTRIBUTE_PREFIX, DEFAULT_VALUE_KEY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub value_key: String,
    pub attribute_prefix: String,
    pub collapse_single_value_objects: bool,
    pub collapse_singleton_arrays: bool,
    pub summarize_leaf_values: bool,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value_key(mut self, value_key: impl Into<String>) -> Self {
        self.value_key = value_key.into();
        self
    }

    pub fn with_attribute_prefix(mut self, attribute_prefix: impl Into<String>) -> Self {
        self.attribute_prefix = attribute_prefix.into();
        self
    }

    pub fn with_collapse_single_value_objects(mut self, collapse: bool) -> Self {
        self.collapse_single_value_objects = collapse;
        self
    }

    pub fn with_collapse_singleton_arrays(mut self, collapse: bool) -> Self {
        self.collapse_singleton_arrays = collapse;
        self
    }

    pub fn with_summarize_leaf_values(mut self, summarize: bool) -> Self {
        self.summarize_leaf_values = summarize;
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            value_key: DEFAULT_VALUE_KEY.to_string(),
            attribute_prefix: DEFAULT_ATTRIBUTE_PREFIX.to_string(),
            collapse_single_value_objects: true,
            collapse_singleton_arrays: false,
            summarize_leaf_values: true,
        }
    }
}
