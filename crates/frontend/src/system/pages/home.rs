use leptos::prelude::*;

/// Landing page: one navigation affordance into the catalog.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="landing">
            <h1>"FakeStore Manager"</h1>
            <p class="tagline">"Product catalog administration"</p>
            <a class="btn btn-primary" href="/products">"View Products"</a>
        </div>
    }
}
