mod default;

use cloudsign_core::{Context, OsEnv, StaticEnv};
use std::collections::HashMap;

pub fn create_test_context() -> Context {
    let _ = env_logger::builder().is_test(true).try_init();

    Context::new().with_env(OsEnv)
}

pub fn create_test_context_with_env(envs: &[(&str, &str)]) -> Context {
    let _ = env_logger::builder().is_test(true).try_init();

    Context::new().with_env(StaticEnv {
        envs: envs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>(),
    })
}
