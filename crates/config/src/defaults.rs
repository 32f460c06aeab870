//! Default values for optional configuration fields.

pub fn default_enabled() -> bool {
    true
}

pub fn default_instance() -> String {
    "instance-1".to_string()
}

pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub fn default_http_port() -> u16 {
    8080
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_log_format() -> String {
    "pretty".to_string()
}

pub fn default_sink() -> String {
    "stdout".to_string()
}

pub fn default_bridge_level() -> String {
    "trace".to_string()
}

pub fn default_metrics_port() -> u16 {
    9090
}
