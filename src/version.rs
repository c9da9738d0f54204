//! Version information

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_string() -> String {
    format!("docket {}", VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_string_carries_package_version() {
        assert_eq!(version_string(), format!("docket {}", env!("CARGO_PKG_VERSION")));
    }
}
