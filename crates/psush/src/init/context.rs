use psush_core::Context;

/// Constructs a new execution context with all built-in commands registered.
pub fn initialized_context(verbosity: u8) -> Context {
    let mut context = Context::new(verbosity);
    for builtin in psush_builtins::all_builtins() {
        context.register_builtin(builtin);
    }
    context
}
