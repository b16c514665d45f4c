//! Clear-box reduction: canonical reordering, the generic fold, and the reducer tying them
//! together.

mod canonical;
mod fold;
mod reducer;

pub use canonical::reorder;
pub use fold::fold;
pub use reducer::{
    DEFAULT_MAX_DEPTH, DEFAULT_MAX_ITERS, reduce, reduce_fully, reduce_with_iterations,
    reduce_with_limit,
};
