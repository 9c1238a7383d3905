// State management module.
// Forms, lists, and panel state for each tab.

pub mod files;
pub mod form;
pub mod list;
pub mod request;
pub mod status;
pub mod toast;

pub use files::FileBrowserState;
pub use form::{ConfigForm, ScraperForm, TextInput, TranslatorFocus, TranslatorForm};
pub use status::StatusPanel;
pub use toast::Toast;
