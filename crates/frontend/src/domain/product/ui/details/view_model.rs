use std::collections::BTreeMap;

use contracts::domain::product::{Product, ProductDraft};
use contracts::shared::response::{BaseResponse, ValidationFailure};
use leptos::prelude::*;

use crate::domain::product::api::CatalogApi;

/// Editable product fields; key of the field-error map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProductField {
    Title,
    Price,
    Description,
    Category,
    Image,
}

impl ProductField {
    /// Map a backend `propertyName` onto a draft field.
    ///
    /// The backend names fields in PascalCase while the draft uses
    /// lowercase; both spellings are accepted. A name matching no field
    /// maps to nothing; the envelope-level message still carries the
    /// failure.
    pub fn from_backend_name(name: &str) -> Option<Self> {
        match name {
            "Title" | "title" => Some(ProductField::Title),
            "Price" | "price" => Some(ProductField::Price),
            "Description" | "description" => Some(ProductField::Description),
            "Category" | "category" => Some(ProductField::Category),
            "Image" | "image" => Some(ProductField::Image),
            _ => None,
        }
    }
}

/// How a submit round trip landed, decided from the envelope alone.
pub(crate) enum SubmitOutcome {
    Saved {
        message: String,
    },
    Rejected {
        field_errors: BTreeMap<ProductField, String>,
        server_error: String,
    },
}

/// ViewModel for the product create/edit form
#[derive(Clone)]
pub struct ProductFormViewModel<A: CatalogApi> {
    api: A,
    product_id: Option<i64>,
    /// The caller already supplied the record; no fetch needed.
    preloaded: bool,
    pub draft: RwSignal<ProductDraft>,
    pub field_errors: RwSignal<BTreeMap<ProductField, String>>,
    pub server_error: RwSignal<Option<String>>,
    pub success_message: RwSignal<Option<String>>,
    /// True exactly for the duration of the submit round trip.
    pub saving: RwSignal<bool>,
    /// True while the existing record is being fetched (edit mode).
    pub loading: RwSignal<bool>,
}

impl<A: CatalogApi> ProductFormViewModel<A> {
    pub fn new(api: A, product_id: Option<i64>, initial: Option<Product>) -> Self {
        Self {
            api,
            product_id,
            preloaded: initial.is_some(),
            draft: RwSignal::new(initial.map(ProductDraft::from).unwrap_or_default()),
            field_errors: RwSignal::new(BTreeMap::new()),
            server_error: RwSignal::new(None),
            success_message: RwSignal::new(None),
            saving: RwSignal::new(false),
            loading: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.product_id.is_some()
    }

    /// Fetch the record being edited and populate the draft, unless the
    /// caller already supplied it. A failure leaves the draft at defaults
    /// and surfaces the message.
    pub fn load_if_needed(&self) {
        if self.preloaded {
            return;
        }
        let Some(id) = self.product_id else {
            return;
        };
        let api = self.api.clone();
        let draft = self.draft;
        let server_error = self.server_error;
        let loading = self.loading;

        loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let response = api.get_product(id).await;
            match (response.is_success, response.data) {
                (true, Some(product)) => draft.set(ProductDraft::from(product)),
                _ => server_error.set(Some(
                    response
                        .message
                        .unwrap_or_else(|| "Could not load the product".to_string()),
                )),
            }
            loading.set(false);
        });
    }

    /// Update one draft field, clearing any pending error for it. The
    /// field is not re-validated until the next submit.
    pub fn update_field(&self, field: ProductField, value: String) {
        self.draft.update(|draft| match field {
            ProductField::Title => draft.title = value,
            ProductField::Price => draft.price = sanitize_price_input(&value),
            ProductField::Description => draft.description = value,
            ProductField::Category => draft.category = value,
            ProductField::Image => draft.image = value,
        });
        self.field_errors.update(|errors| {
            errors.remove(&field);
        });
    }

    /// Validate and submit the draft, creating or updating by mode. An
    /// invalid draft never reaches the gateway. `on_saved` receives the
    /// success message.
    pub fn submit(&self, on_saved: Callback<String>) {
        if self.saving.get_untracked() {
            return;
        }
        self.server_error.set(None);
        self.field_errors.set(BTreeMap::new());

        let draft_value = self.draft.get_untracked();
        let errors = validate(&draft_value);
        if !errors.is_empty() {
            self.field_errors.set(errors);
            return;
        }

        let api = self.api.clone();
        let product_id = self.product_id;
        let field_errors = self.field_errors;
        let server_error = self.server_error;
        let success_message = self.success_message;
        let saving = self.saving;

        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let response = match product_id {
                Some(id) => api.update_product(id, &draft_value).await,
                None => api.create_product(&draft_value).await,
            };
            saving.set(false);
            match submit_outcome(response) {
                SubmitOutcome::Saved { message } => {
                    success_message.set(Some(message.clone()));
                    on_saved.run(message);
                }
                SubmitOutcome::Rejected {
                    field_errors: errors,
                    server_error: message,
                } => {
                    field_errors.set(errors);
                    server_error.set(Some(message));
                }
            }
        });
    }
}

/// Field-level validation over the draft. An empty map means valid.
pub(crate) fn validate(draft: &ProductDraft) -> BTreeMap<ProductField, String> {
    let mut errors = BTreeMap::new();

    if draft.title.trim().is_empty() {
        errors.insert(ProductField::Title, "Title is required".to_string());
    }
    if draft.price <= 0.0 {
        errors.insert(
            ProductField::Price,
            "Price must be greater than 0".to_string(),
        );
    }
    if draft.description.trim().is_empty() {
        errors.insert(
            ProductField::Description,
            "Description is required".to_string(),
        );
    }
    if draft.category.trim().is_empty() {
        errors.insert(ProductField::Category, "Category is required".to_string());
    }
    if draft.image.trim().is_empty() {
        errors.insert(ProductField::Image, "Image URL is required".to_string());
    }

    errors
}

/// Constrain raw price input to digits with at most one decimal separator
/// and two fractional digits, then parse. Unparsable input is zero.
pub(crate) fn sanitize_price_input(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let mut parts = cleaned.split('.');
    let integer = parts.next().unwrap_or("");
    let sanitized = match parts.next() {
        Some(fraction) => {
            let fraction: String = fraction.chars().take(2).collect();
            format!("{integer}.{fraction}")
        }
        None => integer.to_string(),
    };
    sanitized.parse::<f64>().unwrap_or(0.0)
}

/// Project backend validation failures onto draft fields. Later failures
/// for the same field win, matching the backend's reporting order.
pub(crate) fn map_backend_failures(
    failures: &[ValidationFailure],
) -> BTreeMap<ProductField, String> {
    let mut errors = BTreeMap::new();
    for failure in failures {
        if let Some(field) = ProductField::from_backend_name(&failure.property_name) {
            errors.insert(field, failure.error_message.clone());
        }
    }
    errors
}

pub(crate) fn submit_outcome(response: BaseResponse<Product>) -> SubmitOutcome {
    if response.is_success {
        return SubmitOutcome::Saved {
            message: response
                .message
                .unwrap_or_else(|| "Operation completed successfully".to_string()),
        };
    }

    let field_errors = response
        .validation_errors
        .as_deref()
        .map(map_backend_failures)
        .unwrap_or_default();

    SubmitOutcome::Rejected {
        field_errors,
        server_error: response
            .message
            .unwrap_or_else(|| "The operation failed".to_string()),
    }
}
