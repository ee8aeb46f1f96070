use contracts::domain::product::Product;
use leptos::prelude::*;

use super::view_model::{ProductField, ProductFormViewModel};
use crate::domain::product::api::CatalogApi;

/// Product create/edit form. `id` is `None` in create mode; `initial`
/// skips the fetch when the caller already holds the record; `on_saved`
/// receives the success message once the backend accepts the draft.
#[component]
pub fn ProductForm<A: CatalogApi>(
    api: A,
    id: Option<i64>,
    #[prop(optional)] initial: Option<Product>,
    #[prop(into)] on_saved: Callback<String>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ProductFormViewModel::new(api, id, initial);
    vm.load_if_needed();

    let draft = vm.draft;
    let field_errors = vm.field_errors;
    let server_error = vm.server_error;
    let success_message = vm.success_message;
    let saving = vm.saving;
    let loading = vm.loading;
    let is_edit = vm.is_edit_mode();

    let field_error =
        move |field: ProductField| field_errors.with(|errors| errors.get(&field).cloned());

    view! {
        <div class="details-container product-details">
            <div class="details-header">
                <h1>{move || if is_edit { "Edit Product" } else { "New Product" }}</h1>
            </div>

            {move || server_error.get().map(|e| view! { <div class="error-banner">{e}</div> })}
            {move || success_message.get().map(|m| view! { <div class="success-banner">{m}</div> })}

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading">"Loading product…"</div> }
            >
                <div class="details-form">
                    <div class="form-group">
                        <label for="title">"Title *"</label>
                        <input
                            type="text"
                            id="title"
                            class:invalid=move || field_error(ProductField::Title).is_some()
                            prop:value=move || draft.get().title
                            on:input={
                                let vm = vm.clone();
                                move |ev| vm.update_field(ProductField::Title, event_target_value(&ev))
                            }
                            placeholder="Product title"
                        />
                        {move || field_error(ProductField::Title).map(|msg| view! { <p class="field-error">{msg}</p> })}
                    </div>

                    <div class="form-group">
                        <label for="price">"Price *"</label>
                        <input
                            type="text"
                            id="price"
                            class:invalid=move || field_error(ProductField::Price).is_some()
                            prop:value=move || {
                                let price = draft.get().price;
                                if price == 0.0 { String::new() } else { price.to_string() }
                            }
                            on:input={
                                let vm = vm.clone();
                                move |ev| vm.update_field(ProductField::Price, event_target_value(&ev))
                            }
                            placeholder="0.00"
                        />
                        {move || field_error(ProductField::Price).map(|msg| view! { <p class="field-error">{msg}</p> })}
                    </div>

                    <div class="form-group">
                        <label for="category">"Category *"</label>
                        <input
                            type="text"
                            id="category"
                            class:invalid=move || field_error(ProductField::Category).is_some()
                            prop:value=move || draft.get().category
                            on:input={
                                let vm = vm.clone();
                                move |ev| vm.update_field(ProductField::Category, event_target_value(&ev))
                            }
                            placeholder="Product category"
                        />
                        {move || field_error(ProductField::Category).map(|msg| view! { <p class="field-error">{msg}</p> })}
                    </div>

                    <div class="form-group">
                        <label for="description">"Description *"</label>
                        <textarea
                            id="description"
                            rows="4"
                            class:invalid=move || field_error(ProductField::Description).is_some()
                            prop:value=move || draft.get().description
                            on:input={
                                let vm = vm.clone();
                                move |ev| vm.update_field(ProductField::Description, event_target_value(&ev))
                            }
                            placeholder="Product description"
                        />
                        {move || field_error(ProductField::Description).map(|msg| view! { <p class="field-error">{msg}</p> })}
                    </div>

                    <div class="form-group">
                        <label for="image">"Image URL *"</label>
                        <input
                            type="text"
                            id="image"
                            class:invalid=move || field_error(ProductField::Image).is_some()
                            prop:value=move || draft.get().image
                            on:input={
                                let vm = vm.clone();
                                move |ev| vm.update_field(ProductField::Image, event_target_value(&ev))
                            }
                            placeholder="https://example.com/image.jpg"
                        />
                        {move || field_error(ProductField::Image).map(|msg| view! { <p class="field-error">{msg}</p> })}

                        {move || {
                            let image = draft.get().image;
                            (!image.trim().is_empty()).then(|| view! {
                                <div class="image-preview">
                                    <p>"Preview:"</p>
                                    <img src=image alt="Product preview" />
                                </div>
                            })
                        }}
                    </div>
                </div>

                <div class="details-actions">
                    <button
                        class="btn btn-primary"
                        disabled=move || saving.get()
                        on:click={
                            let vm = vm.clone();
                            move |_| vm.submit(on_saved)
                        }
                    >
                        {move || {
                            if saving.get() {
                                "Saving…"
                            } else if is_edit {
                                "Update"
                            } else {
                                "Create"
                            }
                        }}
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                </div>
            </Show>
        </div>
    }
}
