//! Helpers for rendering components to HTML in unit tests.

use yew::{BaseComponent, ServerRenderer};

/// Server-side renders `C` with the props built by `props`.
///
/// Props are built on the renderer's thread, so they may hold `Rc`s.
pub async fn render<C, F>(props: F) -> String
where
    C: BaseComponent,
    F: FnOnce() -> C::Properties + Send + 'static,
{
    ServerRenderer::<C>::with_props(props)
        .hydratable(false)
        .render()
        .await
}

/// Non-overlapping occurrences of `needle` in `html`.
pub fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}
