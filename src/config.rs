use crate::model::{Method, Normalization, Options, Reading};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{fmt::Debug, fs, ops::RangeBounds, path::Path};

/// Readings file contents.
///
/// Loaded from a TOML file and validated before use.
/// See [`Config::from_file`] for loading.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Averaging method.
    #[serde(default)]
    pub method: Method,
    /// Divisor applied to the summed vector.
    #[serde(default)]
    pub normalization: Normalization,

    /// Readings to average.
    pub readings: Vec<Reading>,
}

impl Config {
    /// Load a [`Config`] from a file.
    ///
    /// The file must be TOML-encoded and contain a serialized [`Config`].
    /// Performs validation on all readings before returning.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, deserialized,
    /// or if the readings are invalid.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;

        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).context("failed to deserialize config")?;

        config.validate().context("failed to validate config")?;

        Ok(config)
    }

    pub fn options(&self) -> Options {
        Options {
            method: self.method,
            normalization: self.normalization,
        }
    }

    fn validate(&self) -> Result<()> {
        check_num(self.readings.len(), 1..).context("invalid number of readings")?;

        for (i_rdg, rdg) in self.readings.iter().enumerate() {
            check_finite(rdg.angle)
                .and_then(|_| check_finite(rdg.weight))
                .with_context(|| format!("invalid reading {i_rdg}"))?;
        }

        Ok(())
    }
}

fn check_num<T, R>(num: T, range: R) -> Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&num) {
        bail!("number must be in the range {range:?}, but is {num:?}");
    }
    Ok(())
}

fn check_finite(num: f64) -> Result<()> {
    if !num.is_finite() {
        bail!("number must be finite, but is {num:?}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_readings_with_defaults() {
        let config = Config::from_toml(
            r#"
[[readings]]
angle = 358.0
weight = 1.0

[[readings]]
angle = 2.0
weight = 0.5
"#,
        )
        .unwrap();

        assert_eq!(config.options(), Options::default());
        assert_eq!(
            config.readings,
            vec![Reading::new(358.0, 1.0), Reading::new(2.0, 0.5)]
        );
    }

    #[test]
    fn parses_method_and_normalization() {
        let config = Config::from_toml(
            r#"
method = "trig"
normalization = "weight_sum"

[[readings]]
angle = 10.0
weight = 2.0
"#,
        )
        .unwrap();

        assert_eq!(config.method, Method::Trig);
        assert_eq!(config.normalization, Normalization::WeightSum);
    }

    #[test]
    fn rejects_empty_readings() {
        let error = Config::from_toml("readings = []").unwrap_err();
        assert!(format!("{error:#}").contains("invalid number of readings"));
    }

    #[test]
    fn rejects_non_finite_reading() {
        let error = Config::from_toml(
            r#"
[[readings]]
angle = 10.0
weight = 1.0

[[readings]]
angle = nan
weight = 1.0
"#,
        )
        .unwrap_err();
        assert!(format!("{error:#}").contains("invalid reading 1"));
    }

    #[test]
    fn rejects_unknown_method() {
        let contents = r#"
method = "median"

[[readings]]
angle = 10.0
weight = 1.0
"#;
        assert!(Config::from_toml(contents).is_err());
    }
}
