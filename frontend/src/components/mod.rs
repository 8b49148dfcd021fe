pub mod add_log_form;
pub mod address_autocomplete;
pub mod log_sheet;
pub mod map_component;
pub mod nav_bar;
pub mod trip_form;
pub mod trip_list;

/// Tagged state for a page-level fetch. One value per fetch, so a page can
/// never be loading and loaded at the same time.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetch<T> {
    Loading,
    Loaded(T),
    Failed,
}

impl<T> Fetch<T> {
    pub fn from_result<E>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Fetch::Loaded(value),
            Err(_) => Fetch::Failed,
        }
    }
}
