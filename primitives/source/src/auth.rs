/// Environment variables checked for a dataset access token, in priority order.
pub const TOKEN_ENV_VARS: [&str; 3] = ["HF_TOKEN", "HUGGING_FACE_HUB_TOKEN", "HUGGINGFACE_TOKEN"];

/// Read the access token from the process environment.
///
/// The first variable in [`TOKEN_ENV_VARS`] holding a non-blank value wins.
pub fn token_from_env() -> Option<String> { token_from_lookup(|key| std::env::var(key).ok()) }

/// Resolve the access token through an arbitrary variable lookup.
pub fn token_from_lookup<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    TOKEN_ENV_VARS
        .iter()
        .filter_map(|key| lookup(key))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}
