use yew::prelude::*;
use super::header::Header;
use super::sidebar::Sidebar;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    /// Path of the route being rendered, used to highlight navigation
    pub current_path: AttrValue,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="drawer lg:drawer-open">
            <input id="nav-drawer" type="checkbox" class="drawer-toggle" />
            <div class="drawer-content flex flex-col min-h-screen bg-base-200">
                <Header />
                <main class="flex-1 p-6 overflow-y-auto">
                    { for props.children.iter() }
                </main>
            </div>
            <Sidebar current_path={props.current_path.clone()} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{count, render};
    use yew_router::history::{AnyHistory, MemoryHistory};
    use yew_router::Router;

    #[function_component(Harness)]
    fn harness() -> Html {
        let history = AnyHistory::from(MemoryHistory::new());
        html! {
            <Router {history}>
                <Layout current_path="/transactions">
                    <p id="page-body">{"page body"}</p>
                </Layout>
            </Router>
        }
    }

    #[tokio::test]
    async fn test_wraps_page_in_header_and_sidebar() {
        let html = render::<Harness, _>(|| ()).await;

        let header = html.find("<header").expect("header rendered");
        let body = html.find("page body").expect("children rendered");
        let sidebar = html.find("CashFlow Pro").expect("sidebar rendered");
        assert!(header < body);
        assert!(body < sidebar);
        assert!(html.contains("<main"));
        assert_eq!(count(&html, "active bg-primary/10"), 1);
    }
}
