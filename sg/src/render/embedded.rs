//! Embedded templates
//!
//! Compiled into the binary from `templates/*.hbs`.

use tracing::debug;

/// Driver source skeleton
pub const DRIVER: &str = include_str!("../../templates/driver.rs.hbs");

/// Cargo manifest for a scaffolded driver package
pub const MANIFEST: &str = include_str!("../../templates/Cargo.toml.hbs");

/// Get the embedded template by name
pub fn get_embedded(name: &str) -> Option<&'static str> {
    debug!(%name, "get_embedded: called");
    match name {
        "driver.rs" => Some(DRIVER),
        "Cargo.toml" => Some(MANIFEST),
        _ => {
            debug!("get_embedded: no match found");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_embedded_driver() {
        let driver = get_embedded("driver.rs").unwrap();
        assert!(driver.contains("{{#each parameters}}"));
        assert!(driver.contains("sweeprun::execute"));
    }

    #[test]
    fn test_get_embedded_manifest() {
        assert!(get_embedded("Cargo.toml").unwrap().contains("[dependencies]"));
    }

    #[test]
    fn test_get_embedded_unknown() {
        assert!(get_embedded("main.cpp").is_none());
    }
}
