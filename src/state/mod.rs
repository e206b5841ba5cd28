//! Page state, one module per interactive region.
//!
//! DESIGN
//! ======
//! Each module holds the plain data and transitions for one region. The
//! components in `crate::components` own the DOM and forward events here,
//! so every behaviour can be exercised by calling these methods directly.

pub mod form;
pub mod gallery;
pub mod nav;
pub mod reveal;
pub mod search;
pub mod theme;
pub mod toast;
