pub mod state;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use self::state::create_state;
use crate::domain::product::api::CatalogApi;

/// Product list page: table, empty state, failure affordance, and the
/// delete-with-confirmation flow.
#[component]
pub fn ProductList<A: CatalogApi>(
    api: A,
    #[prop(into)] on_create: Callback<()>,
    #[prop(into)] on_edit: Callback<i64>,
) -> impl IntoView {
    let state = create_state();

    let fetch = {
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_local(async move {
                let response = api.list_products().await;
                state.update(|s| s.apply_list_response(response));
            });
        }
    };

    // Initial load; every visit asks the backend, nothing is cached.
    fetch();

    let confirm_delete = {
        let api = api.clone();
        move |_: leptos::ev::MouseEvent| {
            let Some(id) = state.try_update(|s| s.begin_delete()).flatten() else {
                return;
            };
            let api = api.clone();
            spawn_local(async move {
                let response = api.delete_product(id).await;
                let refetch = state
                    .try_update(|s| s.apply_delete_response(&response))
                    .unwrap_or(false);
                if refetch {
                    let fresh = api.list_products().await;
                    state.update(|s| s.apply_list_response(fresh));
                }
            });
        }
    };

    view! {
        <div class="page products-page">
            <div class="page-header">
                <h1>"Products"</h1>
                <button class="btn btn-primary" on:click=move |_| on_create.run(())>
                    "Add Product"
                </button>
            </div>

            {move || state.with(|s| s.notice.clone()).map(|m| view! { <div class="success-banner">{m}</div> })}

            {move || state.with(|s| s.error.clone()).map(|e| view! {
                <div class="error-banner">
                    <p class="error-message">{e.message}</p>
                    <p class="error-code">{format!("Error code: {:?}", e.code)}</p>
                </div>
            })}

            {
                let confirm_delete = confirm_delete.clone();
                move || state.with(|s| s.pending_delete).map(|id| {
                    let confirm_delete = confirm_delete.clone();
                    view! {
                        <div class="confirm-bar">
                            <span>{format!("Delete product {id}? This cannot be undone.")}</span>
                            <button
                                class="btn btn-danger"
                                disabled=move || state.with(|s| s.deleting)
                                on:click=confirm_delete
                            >
                                "Delete"
                            </button>
                            <button
                                class="btn btn-secondary"
                                on:click=move |_| state.update(|s| s.cancel_delete())
                            >
                                "Cancel"
                            </button>
                        </div>
                    }
                })
            }

            {move || {
                let s = state.get();
                if !s.loaded {
                    return view! { <div class="loading">"Loading products…"</div> }.into_any();
                }
                if s.is_empty() {
                    return view! {
                        <div class="empty-state">
                            <p>"No products available"</p>
                            <button class="btn-link" on:click=move |_| on_create.run(())>
                                "Create the first product"
                            </button>
                        </div>
                    }
                    .into_any();
                }
                if s.rows.is_empty() {
                    // Load failed; the banner above carries the details.
                    return view! { <></> }.into_any();
                }
                view! {
                    <div class="table-wrap">
                        <p class="record-count">{format!("{} records", s.total_records)}</p>
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"Image"</th>
                                    <th>"Title"</th>
                                    <th>"Price"</th>
                                    <th>"Category"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {s.rows.iter().map(|p| {
                                    let id = p.id;
                                    view! {
                                        <tr>
                                            <td>{id}</td>
                                            <td><img class="thumbnail" src=p.image.clone() alt=p.title.clone() /></td>
                                            <td>{p.title.clone()}</td>
                                            <td>{format!("${:.2}", p.price)}</td>
                                            <td>{p.category.clone()}</td>
                                            <td class="row-actions">
                                                <button class="btn-link" on:click=move |_| on_edit.run(id)>
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn-link danger"
                                                    on:click=move |_| state.update(|st| st.request_delete(id))
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
