//! Footer credit line for the auth screens.

#[cfg(test)]
#[path = "copyright_test.rs"]
mod copyright_test;

use leptos::prelude::*;

use crate::util::clock::current_year;

/// "Copyright © JSCode Blog {year}." footer.
///
/// The year is filled in after hydration from the browser clock.
#[component]
pub fn Copyright() -> impl IntoView {
    let year = RwSignal::new(None::<u32>);
    Effect::new(move || year.set(current_year()));

    view! {
        <p class="copyright">
            "Copyright © "
            <a class="copyright__link" href="http://jscode.blog/" target="_blank" rel="noopener">
                "JSCode Blog"
            </a>
            {move || year_suffix(year.get())}
        </p>
    }
}

fn year_suffix(year: Option<u32>) -> String {
    match year {
        Some(year) => format!(" {year}."),
        None => ".".to_owned(),
    }
}
