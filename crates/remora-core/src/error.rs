pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A length string did not match `<number><unit>`. Computed style is trusted to always
    /// produce well-formed values, so this is a broken caller contract, not a runtime case.
    #[error("malformed CSS length: {value:?}")]
    InvalidLength { value: String },
}
