pub mod calendar;
pub mod config;
pub mod error;
pub mod event;
pub mod localizer;
pub mod user_form;
pub mod view;
