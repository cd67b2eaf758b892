use yew::prelude::*;

/// Class carried by every skeleton placeholder; nothing else uses it.
pub const SKELETON_CLASS: &str = "animate-pulse";

/// Large centred spinner for a widget whose data is still pending.
#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="flex flex-col justify-center items-center py-12 gap-4">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SkeletonLineProps {
    /// Width/height utility classes for the bar
    pub class: Classes,
}

/// Grey bar standing in for a line of text that is still loading
#[function_component(SkeletonLine)]
pub fn skeleton_line(props: &SkeletonLineProps) -> Html {
    html! {
        <div class={classes!("bg-base-300", "rounded", props.class.clone())}></div>
    }
}
