//! # PullCursor - Lazy Sequence Cursors
//!
//! A pull-based cursor protocol for traversing a source of values one at a
//! time, and a library of decorators that wrap a cursor to produce a new one
//! without materializing intermediate collections.
//!
//! - **Cursor protocol**: `has_started`, `has_current`, `current`, `next`
//! - **Sources**: slices, vectors, single values, iterators, fallible iterators
//! - **Decorators**: take, take_while, skip, skip_until, map, filter,
//!   instance_of, on_value, customize
//! - **Error interposition**: catch_error, on_error, convert_error, matching
//!   failures through a hierarchy of failure kinds
//! - **Materialization**: containers, counts, first/last, contains, min/max
//!
//! ```
//! use pullcursor::prelude::*;
//!
//! let data = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
//! let values = from_slice(&data).skip(3).take(2).to_vec().unwrap();
//! assert_eq!(values, vec![3, 4]);
//! ```

pub mod catch_error;
pub mod convert_error;
pub mod cursor;
pub mod cursors;
pub mod customize;
pub mod error;
pub mod filter;
pub mod instance_of;
pub mod iter;
pub mod map;
pub mod materialize;
pub mod on_error;
pub mod on_value;
pub mod skip;
pub mod skip_until;
pub mod take;
pub mod take_while;

pub use catch_error::{CatchError, CatchErrorExt, catch_error};
pub use convert_error::{ConvertError, ConvertErrorExt, convert_error};
pub use cursor::{Cursor, CursorState};
pub use cursors::{
    EmptyCursor, FallibleCursor, IterCursor, SingleCursor, SliceCursor, VecCursor, empty,
    from_iter, from_results, from_slice, from_vec, single,
};
pub use customize::{Customize, CustomizeExt, customize};
pub use error::{Failure, FailureKind, Result};
pub use filter::{Filter, FilterExt, filter};
pub use instance_of::{InstanceOf, InstanceOfExt, Narrow, instance_of};
pub use iter::{CursorIter, CursorIterExt};
pub use map::{Map, MapExt, map};
pub use materialize::{FromCursor, MaterializeExt};
pub use on_error::{OnError, OnErrorExt, on_error};
pub use on_value::{OnValue, OnValueExt, on_value};
pub use skip::{Skip, SkipExt, skip};
pub use skip_until::{SkipUntil, SkipUntilExt, skip_until};
pub use take::{Take, TakeExt, take};
pub use take_while::{TakeWhile, TakeWhileExt, take_while};

/// Everything needed to build and consume pipelines
pub mod prelude {
    pub use crate::catch_error::CatchErrorExt;
    pub use crate::convert_error::ConvertErrorExt;
    pub use crate::cursor::Cursor;
    pub use crate::cursors::{empty, from_iter, from_results, from_slice, from_vec, single};
    pub use crate::customize::CustomizeExt;
    pub use crate::error::{Failure, FailureKind};
    pub use crate::filter::FilterExt;
    pub use crate::instance_of::{InstanceOfExt, Narrow};
    pub use crate::iter::CursorIterExt;
    pub use crate::map::MapExt;
    pub use crate::materialize::MaterializeExt;
    pub use crate::on_error::OnErrorExt;
    pub use crate::on_value::OnValueExt;
    pub use crate::skip::SkipExt;
    pub use crate::skip_until::SkipUntilExt;
    pub use crate::take::TakeExt;
    pub use crate::take_while::TakeWhileExt;
}
