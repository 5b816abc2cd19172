//! This module contains the state owned by each widget.
//!
//! Every type here is a plain value with its transitions as methods. None of them know about
//! rendering or about each other; the components hold one of each in a
//! [`use_state`](iocraft::hooks::UseState::use_state) hook.

mod fruit_basket;
pub use fruit_basket::*;
mod load_state;
pub use load_state::*;
mod name_search;
pub use name_search::*;
mod scream;
pub use scream::*;
