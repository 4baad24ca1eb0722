//! Shared UI states: loading, empty, and error with retry.

/// Render a loading placeholder for a section still fetching.
pub fn render_loading(label: &str) -> String {
    format!(
        r#"<div class="state state--loading">
    <span class="state-label">Loading {label}...</span>
</div>"#
    )
}

/// Render an empty state.
pub fn render_empty(title: &str, message: &str) -> String {
    format!(
        r#"<div class="state state--empty">
    <h3 class="state-title">{title}</h3>
    <p class="state-message">{message}</p>
</div>"#
    )
}

/// Render a fetch failure with a retry affordance.
///
/// Each page fetch is independently retryable without touching cart
/// state; retry simply reissues the fetch.
pub fn render_error(message: &str) -> String {
    format!(
        r#"<div class="state state--error">
    <p class="state-message">{message}</p>
    <button class="retry-button" type="button" data-action="retry">Try Again</button>
</div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_state_offers_retry() {
        let html = render_error("Could not load products");
        assert!(html.contains("Could not load products"));
        assert!(html.contains(r#"data-action="retry""#));
    }

    #[test]
    fn test_loading_state() {
        assert!(render_loading("deals").contains("Loading deals..."));
    }
}
