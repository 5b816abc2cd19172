use iocraft::hooks::State;

mod app;
pub use app::*;
mod async_loader;
pub use async_loader::*;
mod auto_focus;
pub use auto_focus::*;
mod counter;
pub use counter::*;
mod filtered_search;
pub use filtered_search::*;
mod focus_frame;
pub use focus_frame::*;
mod list_builder;
pub use list_builder::*;
mod render_counter;
pub use render_counter::*;
mod section;
pub use section::*;

/// Applies `f` to a copy of the state's value and stores the result, so the change is observed
/// as a single update.
pub(crate) fn modify_state<T, F>(state: &mut State<T>, f: F)
where
    T: Clone + Send + Sync + 'static,
    F: FnOnce(&mut T),
{
    let mut value = state.read().clone();
    f(&mut value);
    state.set(value);
}
