#[cfg(test)]
mod tests {
    use probepatch::Platform;

    #[test]
    fn test_linux_identifiers() {
        for id in ["linux", "Linux", "x86_64-linux", "aarch64-linux-musl", "x86_64-unknown-linux-gnu"] {
            assert_eq!(Platform::from_identifier(id), Platform::Linux, "{}", id);
        }
    }

    #[test]
    fn test_unrecognized_identifiers_fall_back_to_other() {
        for id in ["macos", "x86_64-darwin22", "x64-mingw-ucrt", "freebsd", ""] {
            assert_eq!(Platform::from_identifier(id), Platform::Other, "{}", id);
        }
    }

    #[test]
    fn test_only_linux_injects_probe_object() {
        assert!(Platform::Linux.injects_probe_object());
        assert!(!Platform::Other.injects_probe_object());
    }

    #[test]
    fn test_current_matches_host() {
        let expected = if cfg!(target_os = "linux") {
            Platform::Linux
        } else {
            Platform::Other
        };
        assert_eq!(Platform::current(), expected);
    }

    #[test]
    fn test_display() {
        assert_eq!(Platform::Linux.to_string(), "linux");
        assert_eq!(Platform::Other.to_string(), "other");
    }
}
