//! # bin2dec
//!
//! A tiny binary-to-decimal converter widget.
//!
//! The crate is split into two pure units and a thin piece of glue:
//! - **Validator**: accepts non-empty strings made only of `0` and `1`
//! - **Converter**: maps an accepted string to its base-10 value
//! - **Widget**: one input, one button and one display, wired so that a click
//!   renders the result (or an error) and any further input clears it
//!
//! ## Example
//!
//! ```
//! use bin2dec::{Button, Label, TextField, Widget};
//!
//! let mut widget = Widget::new(TextField::new(" 101 "), Button::default(), Label::default());
//! widget.on_click();
//! assert_eq!(widget.display().text(), "Decimal Value: 5");
//!
//! widget.on_input();
//! assert_eq!(widget.display().text(), "");
//! ```

pub mod converter;
pub mod error;
pub mod validator;
pub mod widget;

pub use converter::{
    DecimalValue, MAX_SAFE_INTEGER, binary_to_decimal, parse_binary, trim_input,
};
pub use error::ConversionError;
pub use validator::is_valid_binary;
pub use widget::{
    Button, ButtonControl, DEFAULT_BUTTON_LABEL, DisplayControl, DisplayState,
    INVALID_BINARY_MESSAGE, InputControl, Label, RESULT_PREFIX, TextField, Widget, WidgetEvent,
    click, render,
};
