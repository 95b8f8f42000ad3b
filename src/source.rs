use crate::error::InputError;
use crate::event::InputEvent;

/// One pollable input source.
///
/// A tick produces zero or more events. `Ok(vec![])` is the normal idle
/// outcome (nothing buffered, malformed frame); `Err` means the source is
/// broken for good — a dead serial link, not a quiet one.
pub trait InputSource {
    fn poll(&mut self) -> Result<Vec<InputEvent>, InputError>;
    fn name(&self) -> &str;
}
