//! Leptos view components.

pub mod compose_form;
pub mod map_panel;
pub mod message_feed;
pub mod viewport_fields;
