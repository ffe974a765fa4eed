use crate::commands::{CmdMessage, CmdResult};
use crate::view::{SortDirection, SortKey, ViewConfig};

/// Filter changes. `None` keeps the current filter.
#[derive(Debug, Clone, Default)]
pub struct ViewFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    /// `Some(None)` clears the bestseller filter.
    pub bestseller: Option<Option<bool>>,
}

impl ViewFilter {
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.category.is_none() && self.bestseller.is_none()
    }
}

pub fn sort(view: &mut ViewConfig, key: SortKey) -> CmdResult {
    view.toggle_sort(key);
    let direction = match view.direction {
        SortDirection::Asc => "ascending",
        SortDirection::Desc => "descending",
    };

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Sorted by {} ({})",
        key_label(key),
        direction
    )));
    result.with_view(view.clone())
}

pub fn toggle_manual(view: &mut ViewConfig) -> CmdResult {
    view.toggle_manual_order();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(if view.manual_order {
        "Manual order on"
    } else {
        "Manual order off"
    }));
    result.with_view(view.clone())
}

pub fn filter(view: &mut ViewConfig, filter: ViewFilter) -> CmdResult {
    if let Some(search) = filter.search {
        view.search = search;
    }
    if let Some(category) = filter.category {
        view.category = category.trim().to_string();
    }
    if let Some(bestseller) = filter.bestseller {
        view.bestseller = bestseller;
    }
    CmdResult::default().with_view(view.clone())
}

/// Back to the default view: newest first, no filters.
pub fn reset(view: &mut ViewConfig) -> CmdResult {
    *view = ViewConfig::default();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info("View reset"));
    result.with_view(view.clone())
}

pub fn key_label(key: SortKey) -> &'static str {
    match key {
        SortKey::Name => "name",
        SortKey::Price => "price",
        SortKey::Date => "date",
    }
}
