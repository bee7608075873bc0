/// Default base URL of the SedoTMP REST API
pub const DEFAULT_BASE_URL: &str = "https://api.sedotmp.com";
/// Default OAuth2 token endpoint of the SedoTMP identity provider
pub const DEFAULT_AUTH_URL: &str = "https://auth.sedotmp.com/oauth/token";
/// Default API version segment inserted into every resource URL
pub const DEFAULT_API_VERSION: &str = "v1";
/// OAuth2 grant type used for the token exchange
pub const GRANT_TYPE_CLIENT_CREDENTIALS: &str = "client_credentials";
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = concat!("sedotmp-client/", env!("CARGO_PKG_VERSION"));
/// Marker looked for in the `Content-Type` header of newline-delimited JSON responses
pub const NDJSON_MARKER: &str = "ndjson";
/// Stray chunked-transfer terminator that sometimes shows up as an NDJSON line
pub const CHUNK_TERMINATOR_LINE: &[u8] = b"0";
/// Name of the API product used in error messages
pub const API_NAME: &str = "SedoTMP API";
