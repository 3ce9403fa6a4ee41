use crate::models::error::AppError;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FetchErrorBannerProps {
    /// What was being loaded, e.g. "categories"
    pub subject: AttrValue,
    pub error: AppError,
}

#[function_component(FetchErrorBanner)]
pub fn fetch_error_banner(props: &FetchErrorBannerProps) -> Html {
    html! {
        <div class="status error" role="alert">
            <p>{format!("❌ Failed to load {}: {}", props.subject, props.error)}</p>
        </div>
    }
}
