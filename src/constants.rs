// src/constants.rs
//
// Application-wide defaults and fixed strings.

/// Port used when neither `--port` nor `PORT` is given.
pub const DEFAULT_PORT: u16 = 3000;

/// Interface the server binds to by default.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Notes file used when neither `--data-file` nor `NOTES_FILE` is given.
pub const DEFAULT_DATA_FILE: &str = "notes.json";

/// Environment variable naming the optional env file loaded at startup.
pub const ENV_FILE_VAR: &str = "NOTES_ENV_FILE";

/// Env file loaded at startup when `NOTES_ENV_FILE` is unset.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Error text returned by the JSON API for unknown note ids.
pub const NOTE_NOT_FOUND_MESSAGE: &str = "Note not found";
