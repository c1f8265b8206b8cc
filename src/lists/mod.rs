pub mod capped_list;
pub mod contiguous;
pub mod dynamic;
#[cfg(feature = "stack")]
pub mod stack;
