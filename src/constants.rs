/// User agent string for HTTP requests
pub const USER_AGENT: &str = "protection-index-server/0.1.0";

/// Open-Meteo API base URL
pub const OPEN_METEO_API_BASE: &str = "https://api.open-meteo.com/v1";

/// Hourly variables requested from the forecast endpoint
pub const HOURLY_VARIABLES: &str =
    "temperature_2m,relativehumidity_2m,precipitation_probability,windspeed_10m";

/// Number of hourly slots considered, starting from the first returned hour
pub const FORECAST_HOURS: usize = 24;

pub const BIND_ADDRESS: &str = "127.0.0.1";
pub const BIND_PORT: u16 = 8000;

/// Combined certificate chain and private key, looked up in the working directory
pub const CERT_FILE: &str = "server.pem";

/// Static front-end files are served from here
pub const STATIC_ROOT: &str = ".";
pub const INDEX_FILE: &str = "index.html";

// ============================================================================
// Response header policy
// ============================================================================

pub const CONTENT_SECURITY_POLICY: &str = "default-src 'self' https:; \
    script-src 'self' https: 'unsafe-inline'; \
    style-src 'self' https: 'unsafe-inline'; \
    img-src 'self' https: data:; \
    font-src 'self' https:; \
    connect-src 'self' https:";
pub const PERMISSIONS_POLICY: &str = "geolocation=(), camera=(), microphone=()";
pub const ALLOWED_ORIGIN: &str = "http://localhost:8000";
pub const ALLOWED_METHODS: &str = "GET, OPTIONS";
pub const ALLOWED_HEADERS: &str = "Content-Type";
