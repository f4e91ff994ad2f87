//! Main application component.

use bin2dec::{DEFAULT_BUTTON_LABEL, DisplayState, click, render};
use gloo::console;
use yew::prelude::*;

use crate::components::{BinaryInput, ConvertButton, ResultDisplay};

/// Main application state.
#[derive(Clone, PartialEq, Default)]
pub struct AppState {
    /// Current text of the input field.
    pub input_text: String,
    /// What the result region shows.
    pub display: DisplayState,
}

impl AppState {
    /// Input changed: keep the new text and clear the result.
    pub fn with_input(&self, text: String) -> Self {
        Self {
            input_text: text,
            display: DisplayState::Empty,
        }
    }

    /// Convert button activated.
    pub fn with_conversion(&self) -> Self {
        Self {
            input_text: self.input_text.clone(),
            display: click(&self.input_text),
        }
    }

    pub fn display_text(&self) -> String {
        render(&self.display)
    }

    pub fn is_error(&self) -> bool {
        matches!(self.display, DisplayState::Invalid(_))
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(AppState::default);

    let on_input_change = {
        let state = state.clone();
        Callback::from(move |text: String| {
            state.set(state.with_input(text));
        })
    };

    let on_convert = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let new_state = state.with_conversion();
            console::log!(format!(
                "convert {:?} -> {}",
                new_state.input_text.trim(),
                new_state.display_text()
            ));
            state.set(new_state);
        })
    };

    html! {
        <div class="app">
            <header class="header">
                <h1>{ "bin2dec" }</h1>
                <p class="subtitle">{ "Binary to Decimal Converter" }</p>
            </header>

            <main class="main">
                <div class="converter">
                    <BinaryInput
                        value={state.input_text.clone()}
                        on_change={on_input_change}
                        on_submit={on_convert.clone()}
                    />
                    <ConvertButton label={DEFAULT_BUTTON_LABEL} on_click={on_convert} />
                    <ResultDisplay text={state.display_text()} is_error={state.is_error()} />
                </div>
            </main>

            <footer class="footer">
                <span class="footer-build">
                    { format!("Build: {}@{} {}", env!("BUILD_HOST"), env!("BUILD_COMMIT"), env!("BUILD_TIMESTAMP")) }
                </span>
            </footer>
        </div>
    }
}
