use {
    crate::error::Error,
    config::{Config, Environment, File},
    std::path::Path,
};

/// Load `D` from a TOML file, then apply environment overrides.
///
/// Nested keys are separated by `__`, so `HTTPD__PORT=5000` overrides
/// `[httpd] port`. A missing file is not an error: the result is built from
/// the environment and the serde defaults of `D`.
pub fn parse_config<P, D>(path: P) -> Result<D, Error>
where
    P: AsRef<Path>,
    D: serde::de::DeserializeOwned,
{
    let env_override = Environment::default().separator("__");

    let config = Config::builder()
        .add_source(File::from(path.as_ref()).required(false))
        .add_source(env_override)
        .build()?;

    Ok(config.try_deserialize()?)
}
