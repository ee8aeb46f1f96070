use contracts::domain::product::Product;
use contracts::shared::response::{BaseResponse, BaseResponseList, ErrorCode};
use leptos::prelude::*;

/// Failure affordance for the list page: the message plus the raw error
/// classification for diagnosability.
#[derive(Clone, Debug, PartialEq)]
pub struct ListError {
    pub message: String,
    pub code: ErrorCode,
}

#[derive(Clone, Debug, Default)]
pub struct ProductListState {
    pub rows: Vec<Product>,
    /// Reported by the backend; may diverge from `rows.len()` once the
    /// backend starts paginating, so nothing assumes they are equal.
    pub total_records: u64,
    pub loaded: bool,
    pub error: Option<ListError>,
    /// Success banner after a delete, survives the follow-up re-fetch.
    pub notice: Option<String>,
    /// Row awaiting explicit confirmation before any delete call is made.
    pub pending_delete: Option<i64>,
    /// True while a delete call is outstanding.
    pub deleting: bool,
}

impl ProductListState {
    /// Fold a fresh list envelope into the state.
    pub fn apply_list_response(&mut self, response: BaseResponseList<Product>) {
        self.loaded = true;
        self.rows = response.data.unwrap_or_default();
        self.total_records = response.total_records;
        self.error = if response.is_success {
            None
        } else {
            Some(ListError {
                message: response
                    .message
                    .unwrap_or_else(|| "Could not load products".to_string()),
                code: response.error_code,
            })
        };
    }

    /// Mark a row for deletion, pending confirmation. Ignored while a
    /// delete call is already outstanding.
    pub fn request_delete(&mut self, id: i64) {
        if self.deleting {
            return;
        }
        self.notice = None;
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Confirm the pending delete: returns the id to send and marks the
    /// controller busy. `None` when nothing is pending or a call is
    /// already outstanding.
    pub fn begin_delete(&mut self) -> Option<i64> {
        if self.deleting {
            return None;
        }
        let id = self.pending_delete.take()?;
        self.deleting = true;
        Some(id)
    }

    /// Fold the delete envelope into the state. Returns whether the list
    /// must be re-fetched (success only). A failure surfaces the message
    /// and leaves the displayed rows untouched.
    pub fn apply_delete_response(&mut self, response: &BaseResponse<bool>) -> bool {
        self.deleting = false;
        if response.is_success {
            self.notice = Some(
                response
                    .message
                    .clone()
                    .unwrap_or_else(|| "Product deleted successfully".to_string()),
            );
            true
        } else {
            self.error = Some(ListError {
                message: response
                    .message
                    .clone()
                    .unwrap_or_else(|| "Could not delete the product".to_string()),
                code: response.error_code,
            });
            false
        }
    }

    /// Loaded successfully with nothing to show.
    pub fn is_empty(&self) -> bool {
        self.loaded && self.error.is_none() && self.rows.is_empty()
    }
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}
