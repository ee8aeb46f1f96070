use crate::domain::product::api::HttpCatalogApi;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One explicitly constructed gateway client for the whole app. Pages
    // resolve it from context; nothing holds a global instance.
    provide_context(HttpCatalogApi::from_env());

    view! {
        <AppRoutes />
    }
}
