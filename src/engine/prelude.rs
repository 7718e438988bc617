pub use crate::engine::{
    card::*,
    catalog::*,
    error::*,
    filter::*,
    mana::*,
    normalize::*,
    question::*,
    selector::*,
    session::*,
    type_line::*,
};
