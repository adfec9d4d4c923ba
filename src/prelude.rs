//! Crate prelude.

// The actual prelude.
pub use crate::{
    answer::{Answer, Operand},
    error::{Result, SetError},
    oracle::contains,
    quant::{exists, forall},
    set::{Pred, Set},
    view::{map, to_string, Image, Table},
    window::{Selection, Window},
};

// Convenient imports within the crate.
pub(crate) use crate::SmallVec;
pub(crate) use bitvec::prelude::*;
pub(crate) use derive_more::From;
pub(crate) use std::{
    fmt::{Debug, Display, Formatter, Result as FmtResult, Write},
    rc::Rc,
};
