mod default;
pub use default::DefaultCredentialProvider;

mod env;
pub use env::EnvCredentialProvider;

mod properties;
pub use properties::PropertiesCredentialProvider;

mod r#static;
pub use r#static::StaticCredentialProvider;
