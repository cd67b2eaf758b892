use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
}

/// Stand-in for sections that exist in navigation but not yet as pages
#[function_component(PlaceholderPage)]
pub fn placeholder_page(props: &Props) -> Html {
    html! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold text-gray-900">{&props.title}</h1>
            <div class="card bg-base-100 shadow">
                <div class="card-body items-center text-center">
                    <i class="fas fa-person-digging text-4xl text-gray-400"></i>
                    <p class="text-gray-600">{"This section is coming soon."}</p>
                </div>
            </div>
        </div>
    }
}
