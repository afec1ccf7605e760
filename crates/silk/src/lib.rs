//! Headless core of the spider web home screen: the radial slot layout, the
//! particle backdrop simulation, the mocked login flow and the navigation
//! state that the desktop shell drives.

pub mod app;
pub mod auth;
pub mod color;
pub mod icon;
pub mod layout;
pub mod macros;
pub mod particles;
pub mod picker;
pub mod screen;
