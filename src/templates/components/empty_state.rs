use maud::{html, Markup};

/// Shown when the filtered view comes back empty. Filtering down to zero
/// results is a normal outcome, not an error.
pub fn empty_state(has_active_filters: bool) -> Markup {
    html! {
        div class="empty-state" {
            h2 { "No properties found" }
            @if has_active_filters {
                p { "Try adjusting your search or filters." }
                button type="button" class="empty-state__clear" { "Clear filters" }
            } @else {
                p { "There are no listings to show right now." }
            }
        }
    }
}

/// A failed fetch renders the user-safe message with a retry affordance.
pub fn error_state(message: &str) -> Markup {
    html! {
        div class="empty-state empty-state--error" {
            h2 { "Something went wrong" }
            p { (message) }
            button type="button" class="empty-state__retry" { "Try Again" }
        }
    }
}
