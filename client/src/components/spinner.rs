//! Busy indicator used while a page waits on the API.

#[cfg(test)]
#[path = "spinner_test.rs"]
mod spinner_test;

use leptos::prelude::*;

/// Rendered size of the spinner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinnerSize {
    Small,
    #[default]
    Base,
    Large,
}

impl SpinnerSize {
    pub fn as_class(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Base => "base",
            Self::Large => "large",
        }
    }
}

#[component]
pub fn Spinner(#[prop(optional)] size: SpinnerSize) -> impl IntoView {
    view! {
        <div
            class=format!("spinner spinner--{}", size.as_class())
            role="progressbar"
            aria-label="Loading"
        ></div>
    }
}
