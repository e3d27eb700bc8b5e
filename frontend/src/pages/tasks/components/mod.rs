pub mod filters;
pub mod form;
pub mod list;

pub use filters::TaskFilters;
pub use form::TaskForm;
pub use list::TaskList;

pub(crate) const SELECT_CLASS: &str =
    "mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg";
