//! Tests for tracing subscriber installation

#[cfg(test)]
mod tests {
    use eyespye::io::logging::init_tracing;

    // Tests the global subscriber is installed only once
    #[test]
    fn test_init_tracing_once() {
        let _ = init_tracing();
        assert!(!init_tracing());
        tracing::info!("subscriber active");
    }
}
