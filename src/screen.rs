/// Alternate-screen setup and teardown.
///
/// Raw mode is owned by the caller; this module only writes the escape
/// sequences that enter and leave the game screen, and guarantees the
/// leaving half runs whatever happened in between.

use std::io::Write;

use crossterm::{cursor, terminal, ExecutableCommand};
use log::warn;

use crate::config::WINDOW_TITLE;

/// Switch to the alternate screen, set the title and hide the cursor.
pub fn enter<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(terminal::SetTitle(WINDOW_TITLE))?;
    out.execute(cursor::Hide)?;
    Ok(())
}

/// Show the cursor and leave the alternate screen.  Both steps are attempted
/// even if the first fails; the first error is returned.
pub fn restore<W: Write>(out: &mut W) -> std::io::Result<()> {
    let shown = out.execute(cursor::Show).map(|_| ());
    let left = out.execute(terminal::LeaveAlternateScreen).map(|_| ());
    shown.and(left)
}

/// Run `body` on the game screen.  The screen is restored before returning,
/// including when entering it or `body` fails.
pub fn with_screen<W, T, F>(out: &mut W, body: F) -> std::io::Result<T>
where
    W: Write,
    F: FnOnce(&mut W) -> std::io::Result<T>,
{
    let result = enter(out).and_then(|()| body(out));
    if let Err(e) = restore(out) {
        warn!("could not restore the screen: {e}");
    }
    result
}
