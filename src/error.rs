use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;

/// HTTP status code type, re-exported for use with error inspection.
pub use reqwest::StatusCode;

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// The HTTP exchange could not be completed
    Transport,
    /// Error related to invalid client configuration
    Validation,
    /// Internal error from dependencies
    Internal,
}

#[derive(Debug)]
pub struct Error {
    kind: Kind,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    backtrace: Backtrace,
}

impl Error {
    pub fn with_source<S: StdError + Send + Sync + 'static>(kind: Kind, source: S) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
            backtrace: Backtrace::capture(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    pub fn inner(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        let e = self.source.as_deref()?;
        e.downcast_ref::<E>()
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Validation {
            reason: message.into(),
        }
        .into()
    }

    #[must_use]
    pub fn transport(url: String, source: reqwest::Error) -> Self {
        Transport {
            cause: TransportCause::from(&source),
            url,
            source,
        }
        .into()
    }

    /// The [`TransportCause`] when this is a [`Kind::Transport`] error.
    #[must_use]
    pub fn transport_cause(&self) -> Option<TransportCause> {
        self.downcast_ref::<Transport>().map(|t| t.cause)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(src) => write!(f, "{:?}: {}", self.kind, src),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

/// Coarse classification of why a request did not complete.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportCause {
    /// The connect or total timeout elapsed
    Timeout,
    /// DNS resolution, TCP connect or TLS handshake failed
    Connect,
    /// Too many redirects, or a redirect loop
    Redirect,
    /// The response body could not be read
    Body,
    /// The request could not be built or sent
    Request,
    Other,
}

impl From<&reqwest::Error> for TransportCause {
    fn from(e: &reqwest::Error) -> Self {
        // Timeout first: a connect timeout reports both.
        if e.is_timeout() {
            TransportCause::Timeout
        } else if e.is_connect() {
            TransportCause::Connect
        } else if e.is_redirect() {
            TransportCause::Redirect
        } else if e.is_body() || e.is_decode() {
            TransportCause::Body
        } else if e.is_request() || e.is_builder() {
            TransportCause::Request
        } else {
            TransportCause::Other
        }
    }
}

#[non_exhaustive]
#[derive(Debug)]
pub struct Transport {
    pub url: String,
    pub cause: TransportCause,
    source: reqwest::Error,
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "request to {} failed ({:?}): {}",
            self.url, self.cause, self.source
        )
    }
}

impl StdError for Transport {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.source)
    }
}

#[non_exhaustive]
#[derive(Debug)]
pub struct Validation {
    pub reason: String,
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid: {}", self.reason)
    }
}

impl StdError for Validation {}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<Validation> for Error {
    fn from(err: Validation) -> Self {
        Error::with_source(Kind::Validation, err)
    }
}

impl From<Transport> for Error {
    fn from(err: Transport) -> Self {
        Error::with_source(Kind::Transport, err)
    }
}
