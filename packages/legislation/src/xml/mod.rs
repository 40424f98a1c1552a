//! XML utilities.

mod utils;

pub use utils::{
    child_text_ns, collect_text, descendant_attribute_ns, descendant_text_ns, find_child_ns,
    find_children_ns, find_descendant_ns, has_tag_ns,
};
