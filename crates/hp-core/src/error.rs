use thiserror::Error;

pub type HpResult<T> = Result<T, HpError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HpError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
