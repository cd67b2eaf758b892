use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

/// One entry of the sidebar navigation
#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub name: &'static str,
    pub route: Route,
    pub icon: &'static str,
}

pub const NAVIGATION: &[NavItem] = &[
    NavItem { name: "Dashboard", route: Route::Dashboard, icon: "fas fa-home" },
    NavItem { name: "Transactions", route: Route::Transactions, icon: "fas fa-dollar-sign" },
    NavItem { name: "Forecasting", route: Route::Forecasting, icon: "fas fa-chart-bar" },
    NavItem { name: "Bank Accounts", route: Route::Accounts, icon: "fas fa-building-columns" },
    NavItem { name: "Reports", route: Route::Reports, icon: "fas fa-file-invoice" },
    NavItem { name: "Settings", route: Route::Settings, icon: "fas fa-cog" },
];

/// Navigation entry whose path is exactly `current_path`.
pub fn active_entry(current_path: &str) -> Option<&'static NavItem> {
    NAVIGATION.iter().find(|item| item.route.to_path() == current_path)
}

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub current_path: AttrValue,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let active = active_entry(&props.current_path);

    html! {
        <div class="drawer-side z-50">
            <label aria-label="close sidebar" class="drawer-overlay" for="nav-drawer"></label>
            <div class="flex flex-col w-64 min-h-full bg-base-100 shadow-lg">
                <div class="flex items-center h-16 px-6 bg-primary">
                    <span class="text-xl font-bold text-primary-content">{"CashFlow Pro"}</span>
                </div>

                <ul class="menu flex-1 px-4 py-6 gap-2">
                    { for NAVIGATION.iter().map(|item| {
                        let is_active = active == Some(item);
                        let link_class = if is_active {
                            classes!("active", "bg-primary/10", "text-primary")
                        } else {
                            classes!("text-gray-600")
                        };
                        html! {
                            <li key={item.name}>
                                <Link<Route> to={item.route.clone()} classes={link_class}>
                                    <i class={classes!(item.icon, "w-5", "mr-3")}></i>
                                    {item.name}
                                </Link<Route>>
                            </li>
                        }
                    })}
                </ul>
            </div>
        </div>
    }
}
