use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::path;

use crate::domain::product::api::HttpCatalogApi;
use crate::domain::product::ui::details::ProductForm;
use crate::domain::product::ui::list::ProductList;
use crate::system::pages::home::HomePage;

fn catalog_api() -> HttpCatalogApi {
    use_context::<HttpCatalogApi>().expect("HttpCatalogApi context not found")
}

#[component]
fn ProductsPage() -> impl IntoView {
    let api = catalog_api();
    let navigate = use_navigate();
    let nav_create = navigate.clone();
    let on_create = Callback::new(move |_: ()| nav_create("/products/new", Default::default()));
    let on_edit =
        Callback::new(move |id: i64| navigate(&format!("/products/{id}"), Default::default()));

    view! { <ProductList api=api on_create=on_create on_edit=on_edit /> }
}

#[component]
fn NewProductPage() -> impl IntoView {
    let api = catalog_api();
    let navigate = use_navigate();
    let nav_saved = navigate.clone();
    let on_saved =
        Callback::new(move |_message: String| nav_saved("/products", Default::default()));
    let on_cancel = Callback::new(move |_: ()| navigate("/products", Default::default()));

    view! { <ProductForm api=api id={None::<i64>} on_saved=on_saved on_cancel=on_cancel /> }
}

#[component]
fn EditProductPage() -> impl IntoView {
    let api = catalog_api();
    let params = use_params_map();
    // Route ids are numeric; anything else never reaches the gateway.
    let id = params.with_untracked(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok()));
    let navigate = use_navigate();
    let nav_saved = navigate.clone();
    let on_saved =
        Callback::new(move |_message: String| nav_saved("/products", Default::default()));
    let on_cancel = Callback::new(move |_: ()| navigate("/products", Default::default()));

    match id {
        Some(id) => view! {
            <ProductForm api=api id=Some(id) on_saved=on_saved on_cancel=on_cancel />
        }
        .into_any(),
        None => view! {
            <div class="error-banner">
                <p>"Invalid product id"</p>
                <a href="/products">"Back to products"</a>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="app-main">
                <Routes fallback=|| view! { <p class="error-banner">"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/products") view=ProductsPage />
                    <Route path=path!("/products/new") view=NewProductPage />
                    <Route path=path!("/products/:id") view=EditProductPage />
                </Routes>
            </main>
        </Router>
    }
}
