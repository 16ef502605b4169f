//! The seam between the I/O-free core and the host that owns the network.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// Executes one HTTP round-trip on behalf of the controller.
///
/// Implementations must return non-2xx responses as `Ok` so the core can
/// interpret the status; `Err` is reserved for failures where no response
/// exists at all (`ApiError::Transport`). Any timeout is the implementation's
/// business, the controller waits for whatever it returns.
pub trait Transport {
    fn execute(&mut self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<F> Transport for F
where
    F: FnMut(&HttpRequest) -> Result<HttpResponse, ApiError>,
{
    fn execute(&mut self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        self(request)
    }
}
