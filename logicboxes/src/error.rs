use reqwest::Method;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The transport only speaks GET and POST.
    #[error("unsupported http method: {0}")]
    UnsupportedMethod(Method),
    /// The service answered with a non-success status; carries the message
    /// from its own status envelope, lower-cased.
    #[error("operation failed: {0}")]
    Api(String),
    #[error("codec error: {0}")]
    Codec(#[from] logicboxes_common::Error),
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("error: {0}")]
    Common(String),
}
