pub mod error;
pub mod files;
pub mod formatter;
pub mod pipeline;

pub use error::{RewriteError, Warning};
pub use files::{FileOutcome, FileResult, Mode, Options, Summary, process_file, process_path};
pub use formatter::{ExternalFormatter, FormatError, Formatter, Passthrough};
pub use pipeline::{Rewrite, rewrite_content};
