use yew::prelude::*;

use crate::mock_data::get_mock_user;

#[function_component(Header)]
pub fn header() -> Html {
    let user = get_mock_user();

    html! {
        <header class="navbar bg-base-100 shadow-sm border-b border-base-300 sticky top-0 z-40 px-6">
            <div class="flex-none lg:hidden">
                <label aria-label="open sidebar" class="btn btn-square btn-ghost" for="nav-drawer">
                    <i class="fas fa-bars text-xl"></i>
                </label>
            </div>
            <div class="flex-1"></div>
            <div class="flex-none flex items-center gap-4">
                <button class="btn btn-ghost btn-circle relative" aria-label="notifications">
                    <i class="fas fa-bell text-xl"></i>
                    <span class="absolute top-2 right-2 block h-2 w-2 rounded-full bg-error"></span>
                </button>
                <div class="flex items-center gap-3">
                    <i class="fas fa-circle-user text-3xl text-gray-500"></i>
                    <div>
                        <p class="text-sm font-medium text-gray-900">{&user.name}</p>
                        <p class="text-xs text-gray-500">{&user.role}</p>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::render;

    #[tokio::test]
    async fn test_shows_user_and_notification_dot() {
        let html = render::<Header, _>(|| ()).await;

        assert!(html.contains("John Doe"));
        assert!(html.contains("Admin"));
        assert!(html.contains("fa-bell"));
        assert!(html.contains("rounded-full bg-error"));
    }
}
