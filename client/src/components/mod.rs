//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and editors while reading/writing the
//! shared slices and `ApiClient` from Leptos context providers.

pub mod address_book;
pub mod entry_editor;
pub mod entry_list;
pub mod nav_bar;
pub mod require_role;
pub mod resource_notice;
pub mod skeleton;
pub mod teacher_card;
pub mod teacher_directory;
