pub mod format_helpers;
