use serde::Serialize;

/// Standard envelope for error responses (and the health check):
/// ```json
/// {
///   "success": false,
///   "data": null,
///   "message": "Feedback 12 not found"
/// }
/// ```
///
/// Feedback payloads themselves are returned bare, so this wrapper only
/// shows up where a message is the point of the response.
#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Constructs a success response with the given data and message.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }

    /// Constructs an error response with a message and default `data`.
    pub fn error(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            data: T::default(),
            message: message.into(),
        }
    }
}
