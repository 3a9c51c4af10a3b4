//! Generic list view-model: one sorted, paginated, optionally filtered
//! collection screen plus its delete-confirmation workflow.

use contracts::domain::common::{EntityRecord, PageQuery};
use leptos::prelude::*;

use super::alert::ToastVariant;
use super::api::entity_service::EntityService;
use super::context::AppContext;
use super::i18n::APP_KEY;

pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Owns the paging, sorting and search state for one entity collection.
/// The view binds the public signals and dispatches the operations; no
/// other contract exists between the two layers.
pub struct ListController<T, S>
where
    T: EntityRecord + Send + Sync + 'static,
    S: EntityService<T> + Clone + 'static,
{
    service: S,
    ctx: AppContext,
    pub search_term: RwSignal<String>,
    pub page_size: RwSignal<u32>,
    /// 1-based; the wire query is 0-based.
    pub page: RwSignal<u32>,
    pub sort_field: RwSignal<String>,
    pub ascending: RwSignal<bool>,
    pub items: RwSignal<Vec<T>>,
    pub total_items: RwSignal<u32>,
    pub is_fetching: RwSignal<bool>,
    /// Identifier staged for removal while the confirmation is open.
    pub remove_id: RwSignal<Option<i64>>,
    pub confirm_open: RwSignal<bool>,
}

impl<T, S> Clone for ListController<T, S>
where
    T: EntityRecord + Send + Sync + 'static,
    S: EntityService<T> + Clone + 'static,
{
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            ctx: self.ctx.clone(),
            search_term: self.search_term,
            page_size: self.page_size,
            page: self.page,
            sort_field: self.sort_field,
            ascending: self.ascending,
            items: self.items,
            total_items: self.total_items,
            is_fetching: self.is_fetching,
            remove_id: self.remove_id,
            confirm_open: self.confirm_open,
        }
    }
}

impl<T, S> ListController<T, S>
where
    T: EntityRecord + Send + Sync + 'static,
    S: EntityService<T> + Clone + 'static,
{
    pub fn new(service: S, ctx: AppContext) -> Self {
        Self {
            service,
            ctx,
            search_term: RwSignal::new(String::new()),
            page_size: RwSignal::new(DEFAULT_PAGE_SIZE),
            page: RwSignal::new(1),
            sort_field: RwSignal::new("id".to_string()),
            ascending: RwSignal::new(true),
            items: RwSignal::new(Vec::new()),
            total_items: RwSignal::new(0),
            is_fetching: RwSignal::new(false),
            remove_id: RwSignal::new(None),
            confirm_open: RwSignal::new(false),
        }
    }

    /// Sort strings for the backend. The `id` tie-breaker is appended
    /// whenever the primary field is something else, so page boundaries
    /// stay deterministic.
    fn sort(&self) -> Vec<String> {
        let field = self.sort_field.get_untracked();
        let direction = if self.ascending.get_untracked() {
            "asc"
        } else {
            "desc"
        };
        let mut result = vec![format!("{field},{direction}")];
        if field != "id" {
            result.push("id".to_string());
        }
        result
    }

    /// Fetch the current page. Dispatches to the search endpoint when a
    /// search term is active. In-flight calls are never cancelled; results
    /// land in completion order.
    pub async fn refresh(&self) {
        self.is_fetching.set(true);
        let query = PageQuery {
            page: self.page.get_untracked() - 1,
            size: self.page_size.get_untracked(),
            sort: self.sort(),
        };
        let term = self.search_term.get_untracked();
        let result = if term.is_empty() {
            self.service.retrieve(Some(&query)).await
        } else {
            self.service.search(&term, Some(&query)).await
        };
        match result {
            Ok(page) => {
                self.total_items.set(page.total());
                self.items.set(page.data);
            }
            Err(error) => self.ctx.alerts.http_error(&error),
        }
        self.is_fetching.set(false);
    }

    pub async fn apply_search(&self, term: &str) {
        if term.is_empty() {
            return self.reset().await;
        }
        self.search_term.set(term.to_string());
        self.refresh().await;
    }

    /// Clear the search and return to the first page.
    pub async fn reset(&self) {
        self.search_term.set(String::new());
        self.page.set(1);
        self.refresh().await;
    }

    /// Re-sorting the same column flips the direction; a new column starts
    /// ascending. Either way the list converges on a fresh first page,
    /// refetching directly only when already there.
    pub async fn change_sort(&self, field: &str) {
        if self.sort_field.get_untracked() == field {
            self.ascending.update(|value| *value = !*value);
        } else {
            self.sort_field.set(field.to_string());
            self.ascending.set(true);
        }
        if self.page.get_untracked() == 1 {
            self.refresh().await;
        } else {
            self.reset().await;
        }
    }

    /// Selecting the page already shown must not refetch.
    pub async fn go_to_page(&self, page: u32) {
        if self.page.get_untracked() == page {
            return;
        }
        self.page.set(page);
        self.refresh().await;
    }

    /// Stage an instance for deletion and open the confirmation surface.
    pub fn request_delete(&self, instance: &T) {
        self.remove_id.set(instance.id());
        self.confirm_open.set(true);
    }

    pub fn cancel_delete(&self) {
        self.confirm_open.set(false);
    }

    /// Delete the staged instance. On failure the staged id and the open
    /// confirmation are kept so the user can retry.
    pub async fn confirm_delete(&self) {
        let Some(id) = self.remove_id.get_untracked() else {
            return;
        };
        match self.service.delete(id).await {
            Ok(()) => {
                let key = format!("{APP_KEY}.{}.deleted", T::message_key());
                let message = self.ctx.i18n.translate(&key, &[("param", &id.to_string())]);
                self.ctx.alerts.info(&message, ToastVariant::Danger);
                self.remove_id.set(None);
                self.refresh().await;
                self.confirm_open.set(false);
            }
            Err(error) => self.ctx.alerts.http_error(&error),
        }
    }

    // Fire-and-forget wrappers for event handlers.

    pub fn refresh_command(&self) {
        let this = self.clone();
        leptos::task::spawn_local(async move { this.refresh().await });
    }

    pub fn apply_search_command(&self, term: String) {
        let this = self.clone();
        leptos::task::spawn_local(async move { this.apply_search(&term).await });
    }

    pub fn reset_command(&self) {
        let this = self.clone();
        leptos::task::spawn_local(async move { this.reset().await });
    }

    pub fn change_sort_command(&self, field: String) {
        let this = self.clone();
        leptos::task::spawn_local(async move { this.change_sort(&field).await });
    }

    pub fn go_to_page_command(&self, page: u32) {
        let this = self.clone();
        leptos::task::spawn_local(async move { this.go_to_page(page).await });
    }

    pub fn confirm_delete_command(&self) {
        let this = self.clone();
        leptos::task::spawn_local(async move { this.confirm_delete().await });
    }
}
