use glintsh::{evaluate, make_global_env, parse, register_builtins, tokenize, Environment, Value};

/// Evaluates `source` against a fresh global environment with the standard builtins registered,
/// the way the CLI's `run`/REPL path does.
pub fn run(source: &str) -> Result<Value, String> {
    let env = make_global_env();
    register_builtins(&env);
    run_in(source, &env)
}

/// Evaluates `source` against a caller-supplied environment, for tests that need to observe
/// state across several evaluations (e.g. closures, `run()` loading another file).
pub fn run_in(source: &str, env: &Environment) -> Result<Value, String> {
    let tokens = tokenize("<test>", source).map_err(|e| e.to_string())?;
    let ast = parse(tokens).map_err(|e| e.to_string())?;
    evaluate(&ast, env).map_err(|e| e.to_string())
}

pub fn new_env() -> Environment {
    let env = make_global_env();
    register_builtins(&env);
    env
}
