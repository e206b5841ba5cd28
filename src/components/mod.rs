//! View components, one per page region.

pub mod chart_host;
pub mod contact_form;
pub mod features;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod navbar;
pub mod search_box;
pub mod toast;
