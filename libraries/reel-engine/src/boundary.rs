//! I/O boundary
//!
//! The engine never prints or reads on its own. Front ends implement
//! [`Console`] to render report lines and answer selection prompts.

/// Where the engine sends output and asks for choices
pub trait Console {
    /// Emit one line of user-facing text
    ///
    /// Lines reported for a single command arrive in order.
    fn report(&mut self, message: &str);

    /// Ask the user to pick a 1-based entry out of `max`
    ///
    /// `None` means no selection. The engine ignores any value outside
    /// `[1, max]`.
    fn request_selection(&mut self, max: usize) -> Option<usize>;
}

/// Interpret a raw answer to a selection prompt
///
/// Anything that is not an integer in `[1, max]` is no selection.
pub fn parse_selection(input: &str, max: usize) -> Option<usize> {
    let choice: usize = input.trim().parse().ok()?;
    (1..=max).contains(&choice).then_some(choice)
}
