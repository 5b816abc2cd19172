//! # hooks-showcase
//!
//! A handful of isolated terminal widgets, each demonstrating one of the three hook primitives
//! that `iocraft` shares with React: state, post-render side effects, and non-rendering refs.

#![warn(missing_docs)]

// # Organization
//
// The plain state types live in `state` and know nothing about rendering, so they can be tested
// directly. The components in `components` hold those types in hooks and translate terminal
// events into their transitions.
//
// As with the hooks and components of `iocraft` itself, the collections of widget types stay in
// their modules. Everything else is re-exported in the root.

mod config;
mod fetch;
mod focus;

mod flattened_exports {
    pub use crate::config::*;
    pub use crate::fetch::*;
    pub use crate::focus::*;
}

pub use flattened_exports::*;

/// The widgets and the page that composes them.
pub mod components;

/// Framework-independent state owned by each widget.
pub mod state;

/// By importing this module, you'll bring all of the crate's commonly used types into scope.
pub mod prelude {
    pub use crate::components::*;
    pub use crate::flattened_exports::*;
    pub use crate::state::*;
}
