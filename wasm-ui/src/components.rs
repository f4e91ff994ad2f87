//! UI components for the converter widget.

use yew::prelude::*;

/// Text field for the binary string.
#[derive(Properties, PartialEq)]
pub struct BinaryInputProps {
    pub value: String,
    pub on_change: Callback<String>,
    /// Fired when Enter is pressed inside the field.
    pub on_submit: Callback<()>,
}

#[function_component(BinaryInput)]
pub fn binary_input(props: &BinaryInputProps) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let target: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_change.emit(target.value());
        })
    };

    let on_keydown = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                on_submit.emit(());
            }
        })
    };

    html! {
        <input
            id="binaryInput"
            class="binary-input"
            type="text"
            inputmode="numeric"
            autocomplete="off"
            spellcheck="false"
            placeholder="Enter a binary number, e.g. 1010"
            value={props.value.clone()}
            oninput={on_input}
            onkeydown={on_keydown}
        />
    }
}

/// Button that triggers conversion.
#[derive(Properties, PartialEq)]
pub struct ConvertButtonProps {
    pub label: String,
    pub on_click: Callback<()>,
}

#[function_component(ConvertButton)]
pub fn convert_button(props: &ConvertButtonProps) -> Html {
    let on_click = {
        let on_click = props.on_click.clone();
        Callback::from(move |_: MouseEvent| {
            on_click.emit(());
        })
    };

    html! {
        <button id="convertButton" class="convert-button" onclick={on_click}>
            { &props.label }
        </button>
    }
}

/// Region showing the result or the validation error.
#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub text: String,
    pub is_error: bool,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let class = if props.is_error {
        classes!("result", "error")
    } else {
        classes!("result")
    };

    html! {
        <p id="result" class={class} aria-live="polite">{ &props.text }</p>
    }
}
