// src/constants.rs

/// Token used when a label sanitizes to nothing.
pub const PLACEHOLDER_NAME: &str = "untitled";

/// Upper bound on the length of a sanitized folder or file name.
pub const MAX_TOKEN_LEN: usize = 64;

/// Maximum number of words kept from a folder label.
pub const FOLDER_MAX_WORDS: usize = 2;

/// Maximum number of words kept from a file name label.
pub const NAME_MAX_WORDS: usize = 3;

/// Folder used in date mode when a file's modification time cannot be read.
pub const UNKNOWN_DATE_FOLDER: &str = "unknown_date";

/// Folder used for animated GIFs, which are never sent to a vision model.
pub const ANIMATED_GIF_FOLDER: &str = "animated_gifs";

/// Name of the output folder created next to the input when none is given.
pub const DEFAULT_OUTPUT_DIR_NAME: &str = "organized_folder";

/// Log file used by silent mode when no explicit path is given.
pub const DEFAULT_LOG_FILE: &str = "operation_log.txt";

/// Number of characters read from a text or code file for summarization.
pub const MAX_EXTRACT_CHARS: usize = 3000;

/// Number of extracted characters included in the summary prompt.
pub const MAX_PROMPT_CONTENT_CHARS: usize = 2000;

/// Default request timeout for inference calls, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Separator line used between blocks of console and log output.
pub const SECTION_SEPARATOR: &str = "--------------------------------------------------";
