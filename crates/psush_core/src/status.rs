/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Generic error.
pub const GENERAL_ERROR: i32 = 1;

/// Built-in command error, for example invalid arguments.
pub const BUILTIN_ERROR: i32 = 2;

/// A redirection file could not be opened.
pub const REDIRECT_FAILURE: i32 = 7;

/// The program could not be executed.
pub const COMMAND_NOT_FOUND: i32 = 127;
