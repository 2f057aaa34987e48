pub mod search_viewmodel;
pub mod results_viewmodel;

pub use search_viewmodel::{AnimatorEvent, SearchPresenter, SearchViewModel};
pub use results_viewmodel::build_display_model;
