/// permissive cross-origin header attached to every response from this
/// layer
pub const CORS_HEADER: (&str, &str) = ("Access-Control-Allow-Origin", "*");
pub const JSON_MIME: (&str, &str) = ("Content-type", "application/json;charset=utf-8");

/// opaque body returned when the request document cannot be parsed. the
/// underlying failure is logged server-side and never echoed to the caller.
pub const MALFORMED_REQUEST_BODY: &str = "Failed to parse intermediate request format";

/// an http-shaped response handed back to the transport layer.
/// serialization onto the wire is the transport's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub status_message: String,
    pub body: String,
    pub headers: Vec<(String, String)>,
}

impl Response {
    fn with_cors(status: u16, status_message: &str, body: String) -> Response {
        Response {
            status,
            status_message: status_message.to_string(),
            body,
            headers: vec![(CORS_HEADER.0.to_string(), CORS_HEADER.1.to_string())],
        }
    }

    /// 200 response carrying a handler-built json body
    pub fn ok(body: String) -> Response {
        let mut response = Response::with_cors(200, "OK", body);
        response
            .headers
            .push((JSON_MIME.0.to_string(), JSON_MIME.1.to_string()));
        response
    }

    /// 400 response carrying the specific failure description
    pub fn bad_request(message: String) -> Response {
        Response::with_cors(400, "Bad Request", message)
    }

    /// 500 response with the generic parse-failure body
    pub fn internal_error() -> Response {
        Response::with_cors(
            500,
            "Internal Server Error",
            MALFORMED_REQUEST_BODY.to_string(),
        )
    }

    pub fn has_cors_header(&self) -> bool {
        self.headers
            .iter()
            .any(|(name, value)| name == CORS_HEADER.0 && value == CORS_HEADER.1)
    }
}
