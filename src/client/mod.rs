//! Terminal rendition of the translation form: state, the backend it talks
//! to, and the clipboard/speech capabilities it can use on a result.

pub mod backend;
pub mod clipboard;
pub mod command;
pub mod form;
pub mod speech;

pub use backend::{ClientError, HttpBackend, TranslateBackend};
pub use clipboard::{Clipboard, SystemClipboard};
pub use command::FormCommand;
pub use form::TranslateForm;
pub use speech::{Speaker, SystemSpeaker};
