pub mod config;
pub mod events;

pub mod gui {
    pub mod app;
    pub mod backdrop;
    pub mod pages;
    pub mod theme;
    pub mod web;
}

pub mod sys {
    pub mod runtime;
    pub mod watch;
}
