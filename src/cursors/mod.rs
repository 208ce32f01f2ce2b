mod empty;
mod fallible;
mod iter;
mod single;
mod slice;
mod vec;

pub use empty::{EmptyCursor, empty};
pub use fallible::{FallibleCursor, from_results};
pub use iter::{IterCursor, from_iter};
pub use single::{SingleCursor, single};
pub use slice::{SliceCursor, from_slice};
pub use vec::{VecCursor, from_vec};
