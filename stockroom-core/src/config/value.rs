use super::ConfigError;

/// A single configuration value as read from YAML or the environment.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
    List(Vec<ConfigValue>),
}

impl ConfigValue {
    pub(crate) fn from_yaml(value: &serde_yaml::Value) -> Self {
        match value {
            serde_yaml::Value::Bool(b) => ConfigValue::Bool(*b),
            serde_yaml::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    ConfigValue::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    ConfigValue::Float(f)
                } else {
                    ConfigValue::String(n.to_string())
                }
            }
            serde_yaml::Value::String(s) => ConfigValue::String(s.clone()),
            serde_yaml::Value::Null => ConfigValue::Null,
            serde_yaml::Value::Sequence(seq) => {
                ConfigValue::List(seq.iter().map(ConfigValue::from_yaml).collect())
            }
            other => ConfigValue::String(format!("{other:?}")),
        }
    }

    fn type_mismatch(key: &str, expected: &'static str) -> ConfigError {
        ConfigError::TypeMismatch {
            key: key.to_string(),
            expected,
        }
    }
}

/// Conversion from a raw [`ConfigValue`] into a concrete setting type.
pub trait FromConfigValue: Sized {
    fn from_config_value(value: &ConfigValue, key: &str) -> Result<Self, ConfigError>;
}

impl FromConfigValue for String {
    fn from_config_value(value: &ConfigValue, key: &str) -> Result<Self, ConfigError> {
        match value {
            ConfigValue::String(s) => Ok(s.clone()),
            ConfigValue::Integer(i) => Ok(i.to_string()),
            ConfigValue::Float(f) => Ok(f.to_string()),
            ConfigValue::Bool(b) => Ok(b.to_string()),
            ConfigValue::Null | ConfigValue::List(_) => {
                Err(ConfigValue::type_mismatch(key, "String"))
            }
        }
    }
}

impl FromConfigValue for i64 {
    fn from_config_value(value: &ConfigValue, key: &str) -> Result<Self, ConfigError> {
        match value {
            ConfigValue::Integer(i) => Ok(*i),
            ConfigValue::String(s) => s
                .trim()
                .parse()
                .map_err(|_| ConfigValue::type_mismatch(key, "i64")),
            _ => Err(ConfigValue::type_mismatch(key, "i64")),
        }
    }
}

/// Unsigned settings (ports, pool sizes, timeouts) go through `i64` and are
/// range-checked, so `-1` or `70000` for a port is a type mismatch.
macro_rules! unsigned_from_config {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromConfigValue for $ty {
                fn from_config_value(value: &ConfigValue, key: &str) -> Result<Self, ConfigError> {
                    let raw = i64::from_config_value(value, key)
                        .map_err(|_| ConfigValue::type_mismatch(key, stringify!($ty)))?;
                    <$ty>::try_from(raw).map_err(|_| ConfigValue::type_mismatch(key, stringify!($ty)))
                }
            }
        )*
    };
}

unsigned_from_config!(u16, u32, u64);

impl FromConfigValue for bool {
    fn from_config_value(value: &ConfigValue, key: &str) -> Result<Self, ConfigError> {
        match value {
            ConfigValue::Bool(b) => Ok(*b),
            ConfigValue::String(s) => match s.to_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigValue::type_mismatch(key, "bool")),
            },
            _ => Err(ConfigValue::type_mismatch(key, "bool")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_out_of_range_is_mismatch() {
        let err = u16::from_config_value(&ConfigValue::Integer(70_000), "server.port").unwrap_err();
        assert!(matches!(err, ConfigError::TypeMismatch { expected: "u16", .. }));
    }

    #[test]
    fn env_strings_parse_as_numbers_and_bools() {
        let port = u16::from_config_value(&ConfigValue::String("8080".into()), "server.port");
        assert_eq!(port.unwrap(), 8080);
        let flag = bool::from_config_value(&ConfigValue::String("No".into()), "flag");
        assert!(!flag.unwrap());
    }

    #[test]
    fn lists_and_nulls_are_not_scalars() {
        let list = ConfigValue::List(vec![ConfigValue::Integer(1)]);
        assert!(String::from_config_value(&list, "server.host").is_err());
        assert!(u16::from_config_value(&ConfigValue::Null, "server.port").is_err());
    }
}
