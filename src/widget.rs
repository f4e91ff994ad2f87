//! Converter widget: one input, one button, one display.
//!
//! The widget owns its three controls, handed in at construction. Event
//! handling is split into pure reducers ([`click`], [`render`]) and the
//! [`Widget`] wrapper that reads the input control and writes the display
//! control. The web UI uses the reducers directly with its own state hook.

use tracing::debug;

use crate::converter::{DecimalValue, parse_binary};
use crate::error::ConversionError;

/// Text shown in front of a successful conversion.
pub const RESULT_PREFIX: &str = "Decimal Value: ";

/// Text shown when the input is not a binary number.
pub const INVALID_BINARY_MESSAGE: &str = "Please enter a valid binary number (only 0s and 1s).";

/// Default caption of the convert button.
pub const DEFAULT_BUTTON_LABEL: &str = "Convert";

/// Content of the display region.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DisplayState {
    /// Nothing shown.
    #[default]
    Empty,
    /// A converted value.
    Value(DecimalValue),
    /// The last conversion attempt was rejected.
    Invalid(ConversionError),
}

impl DisplayState {
    pub fn is_empty(&self) -> bool {
        matches!(self, DisplayState::Empty)
    }
}

/// Events the widget reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEvent {
    /// The convert button was activated.
    Click,
    /// The input text changed.
    Input,
}

/// Compute the display state for a click, given the raw input text.
pub fn click(input_text: &str) -> DisplayState {
    match parse_binary(input_text) {
        Ok(value) => DisplayState::Value(value),
        Err(e) => DisplayState::Invalid(e),
    }
}

/// Render a display state to the text shown to the user.
pub fn render(state: &DisplayState) -> String {
    match state {
        DisplayState::Empty => String::new(),
        DisplayState::Value(value) => format!("{RESULT_PREFIX}{value}"),
        DisplayState::Invalid(e) => e.to_string(),
    }
}

/// A control the widget reads binary text from.
pub trait InputControl {
    fn value(&self) -> String;
}

/// A control the widget writes its output text into.
pub trait DisplayControl {
    fn set_text(&mut self, text: &str);
}

/// The control that triggers conversion.
pub trait ButtonControl {
    fn label(&self) -> String;
}

/// In-memory text input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
}

impl TextField {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

impl InputControl for TextField {
    fn value(&self) -> String {
        self.value.clone()
    }
}

/// In-memory text display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Label {
    text: String,
}

impl Label {
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl DisplayControl for Label {
    fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }
}

/// In-memory button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    label: String,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Default for Button {
    fn default() -> Self {
        Self::new(DEFAULT_BUTTON_LABEL)
    }
}

impl ButtonControl for Button {
    fn label(&self) -> String {
        self.label.clone()
    }
}

/// The converter widget, wired to its injected controls.
pub struct Widget<I, B, D> {
    input: I,
    button: B,
    display: D,
    state: DisplayState,
}

impl<I, B, D> Widget<I, B, D>
where
    I: InputControl,
    B: ButtonControl,
    D: DisplayControl,
{
    /// Build a widget around its controls. The display is cleared.
    pub fn new(input: I, button: B, mut display: D) -> Self {
        display.set_text("");
        Self {
            input,
            button,
            display,
            state: DisplayState::Empty,
        }
    }

    /// Handle a button activation: read, trim, validate, convert and render.
    pub fn on_click(&mut self) -> DisplayState {
        let text = self.input.value();
        let state = click(&text);
        debug!(button = %self.button.label(), ?state, "click");
        self.show(state)
    }

    /// Handle an input change: clear the display.
    pub fn on_input(&mut self) -> DisplayState {
        self.show(DisplayState::Empty)
    }

    /// Dispatch an event to its handler.
    pub fn handle(&mut self, event: WidgetEvent) -> DisplayState {
        match event {
            WidgetEvent::Click => self.on_click(),
            WidgetEvent::Input => self.on_input(),
        }
    }

    fn show(&mut self, state: DisplayState) -> DisplayState {
        self.display.set_text(&render(&state));
        self.state = state;
        state
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    /// Mutable access to the input control, e.g. to simulate typing.
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn button(&self) -> &B {
        &self.button
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Take the controls back.
    pub fn into_parts(self) -> (I, B, D) {
        (self.input, self.button, self.display)
    }
}
