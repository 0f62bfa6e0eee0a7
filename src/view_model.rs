//! The table view model: owns the interactive state and derives the view.
//!
//! Each derivation runs the whole pipeline from scratch:
//! headers -> visibility/order -> projection -> text filter -> sort.

use crate::config::TableOptions;
use crate::error::{Result, TableError};
use crate::footer::{compute_text, footer_text};
use crate::headers::{
    ensure_unique_ids, header_ids, hidden_from_selection, initial_hidden, resolve_headers,
};
use crate::projection::project_items;
use crate::render::{FilterInput, HeaderView, Renderer, ViewState};
use crate::sort::sort_rows;
use crate::store::{read_id_list, write_id_list, ColumnStateKeys, KeyValueStore};
use crate::text_filter::apply_text_filters;
use crate::types::{Header, Item, Pagination, ProjectedRow};

/// Receives the final column order when a drag interaction completes.
pub trait ReorderHandler {
    fn on_reorder_complete(&mut self, new_ordered_ids: &[String]);
}

pub struct TableViewModel<S: KeyValueStore> {
    options: TableOptions,
    keys: ColumnStateKeys,
    headers: Vec<Header>,
    items: Vec<Item>,
    pagination: Pagination,
    store: S,
    // Last written values; the store is only consulted until the first write.
    hidden_buffer: Option<Vec<String>>,
    order_buffer: Option<Vec<String>>,
}

impl<S: KeyValueStore> TableViewModel<S> {
    #[must_use]
    pub fn new(options: TableOptions, store: S) -> Self {
        let keys = ColumnStateKeys::new(&options.cookie_identifier);
        Self {
            options,
            keys,
            headers: Vec::new(),
            items: Vec::new(),
            pagination: Pagination::default(),
            store,
            hidden_buffer: None,
            order_buffer: None,
        }
    }

    /// Builder form of [`Self::set_headers`] and [`Self::set_items`].
    pub fn with_data(mut self, headers: Vec<Header>, items: Vec<Item>) -> Result<Self> {
        self.set_headers(headers)?;
        self.set_items(items);
        Ok(self)
    }

    /// Replace the column descriptors. Ids must be unique.
    pub fn set_headers(&mut self, headers: Vec<Header>) -> Result<()> {
        ensure_unique_ids(&headers)?;
        self.headers = headers;
        Ok(())
    }

    pub fn set_items(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    #[must_use]
    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    #[must_use]
    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn keys(&self) -> &ColumnStateKeys {
        &self.keys
    }

    /// Header by id.
    pub fn header(&self, id: &str) -> Result<&Header> {
        self.headers
            .iter()
            .find(|h| h.id == id)
            .ok_or_else(|| TableError::UnknownHeader(id.to_string()))
    }

    /// Ids of hidden columns: last selection, else the persisted set, else
    /// the complement of `init_headers`.
    #[must_use]
    pub fn hidden_headers(&self) -> Vec<String> {
        if let Some(hidden) = &self.hidden_buffer {
            return hidden.clone();
        }
        read_id_list(&self.store, &self.keys.hidden)
            .unwrap_or_else(|| initial_hidden(&self.headers, &self.options.init_headers))
    }

    /// Persisted column ranking, empty when none.
    #[must_use]
    pub fn header_order(&self) -> Vec<String> {
        if let Some(order) = &self.order_buffer {
            return order.clone();
        }
        read_id_list(&self.store, &self.keys.order).unwrap_or_default()
    }

    /// Visible columns in display order.
    #[must_use]
    pub fn filtered_headers(&self) -> Vec<&Header> {
        resolve_headers(&self.headers, &self.hidden_headers(), &self.header_order())
    }

    /// Header click. Returns `false` when sorting is disabled.
    pub fn sort_column(&mut self, column_id: &str) -> bool {
        if !self.options.sort {
            return false;
        }
        self.pagination.sort_column(column_id);
        tracing::trace!(
            sort_by = %self.pagination.sort_by,
            descending = self.pagination.descending,
            "sort changed"
        );
        true
    }

    /// Set the filter input of a column. Returns `false` when text filtering
    /// is off, the column is unknown or the column has no filter input.
    pub fn set_text_filter(&mut self, column_id: &str, value: &str) -> bool {
        if !self.options.text_filter {
            return false;
        }
        let allowed = self
            .header(column_id)
            .is_ok_and(Header::text_filter_enabled);
        if !allowed {
            return false;
        }
        self.pagination.set_text_filter(column_id, value);
        true
    }

    pub fn clear_text_filters(&mut self) {
        self.pagination.text_filters.clear();
    }

    /// Column picker result: every column not selected becomes hidden.
    pub fn select_columns(&mut self, selected: &[String]) {
        let hidden = hidden_from_selection(&self.headers, selected);
        if let Err(e) = write_id_list(&mut self.store, &self.keys.hidden, &hidden) {
            tracing::warn!(error = %e, "failed to persist hidden columns");
        }
        self.hidden_buffer = Some(hidden);
    }

    /// Persist a new visible column order verbatim.
    pub fn reorder_headers(&mut self, ordered_ids: &[String]) {
        let order = ordered_ids.to_vec();
        if let Err(e) = write_id_list(&mut self.store, &self.keys.order, &order) {
            tracing::warn!(error = %e, "failed to persist column order");
        }
        self.order_buffer = Some(order);
    }

    /// Drag one visible column from `from` to `to` and persist the result.
    /// Returns `false` when either position is out of range.
    pub fn move_header(&mut self, from: usize, to: usize) -> bool {
        let mut ids = header_ids(&self.filtered_headers());
        if from >= ids.len() || to >= ids.len() {
            return false;
        }
        let moved = ids.remove(from);
        ids.insert(to, moved);
        self.reorder_headers(&ids);
        true
    }

    /// Rows after projection, filtering and sorting.
    #[must_use]
    pub fn filtered_items(&self) -> Vec<ProjectedRow> {
        let visible = self.filtered_headers();
        let rows = project_items(&self.items, &visible);
        let rows = apply_text_filters(rows, &self.pagination.text_filters);
        let rows = sort_rows(rows, &self.pagination);
        tracing::trace!(
            items = self.items.len(),
            rows = rows.len(),
            columns = visible.len(),
            "derived rows"
        );
        rows
    }

    #[must_use]
    pub fn footer_text(&self) -> String {
        footer_text(
            &self.options.text,
            self.items.len(),
            self.filtered_items().len(),
        )
    }

    /// Derive the complete view.
    #[must_use]
    pub fn view_state(&self) -> ViewState {
        let rows = self.filtered_items();
        let item_count = self.items.len();
        let filtered_item_count = rows.len();
        let has_rows = !rows.is_empty();

        let headers = self
            .filtered_headers()
            .into_iter()
            .map(|h| self.header_view(h))
            .collect();

        ViewState {
            headers,
            rows,
            item_count,
            filtered_item_count,
            footer: self.options.enable_footer.then(|| {
                footer_text(&self.options.text, item_count, filtered_item_count)
            }),
            text: compute_text(&self.options.text, item_count, filtered_item_count),
            enable_headers: self.options.enable_headers,
            disable_html: self.options.disable_html,
            sortable: self.options.sort,
            scrollable: self.options.has_fixed_height() && has_rows,
            max_height: if has_rows {
                self.options.height.clone()
            } else {
                crate::config::AUTO_HEIGHT.to_string()
            },
        }
    }

    fn header_view(&self, header: &Header) -> HeaderView {
        let filter = (self.options.text_filter && header.text_filter_enabled()).then(|| {
            FilterInput {
                placeholder: header.filter_placeholder(),
                value: self
                    .pagination
                    .text_filter(&header.id)
                    .unwrap_or_default()
                    .to_string(),
            }
        });
        HeaderView {
            id: header.id.clone(),
            text: header.text.clone(),
            title: header.title(),
            align: header.effective_align(),
            sort: self.pagination.sort_direction(&header.id),
            filter,
        }
    }

    /// Derive and hand the view to a renderer.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        renderer.render(&self.view_state());
    }
}

impl<S: KeyValueStore> ReorderHandler for TableViewModel<S> {
    fn on_reorder_complete(&mut self, new_ordered_ids: &[String]) {
        self.reorder_headers(new_ordered_ids);
    }
}
