//! Service layer

mod console_controller;
mod record_form;

pub use console_controller::{ConsoleController, DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE};
pub use record_form::validate_record_form;
