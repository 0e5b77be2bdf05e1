//! # Text-based user interface (TUI)
//!
//! Terminal setup and teardown for the game. The game is played with the
//! mouse, so besides the alternate screen and raw mode, mouse capture must be
//! switched on for the duration and reliably switched off again, even if the
//! game panics.

use std::{io::{self, stdout, Stdout}, panic, sync::{Arc, Mutex}, thread};

use crossterm::{
	event::{DisableMouseCapture, EnableMouseCapture},
	execute,
	terminal::{
		disable_raw_mode, enable_raw_mode,
		EnterAlternateScreen, LeaveAlternateScreen
	}
};
use ratatui::{backend::{Backend, CrosstermBackend}, Terminal};

////////////////////////////////////////////////////////////////////////////////
//                         Text-based user interface.                         //
////////////////////////////////////////////////////////////////////////////////

/// The text-based user interface (TUI) type.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Open the text-based user interface (TUI), apply `f` to it, and restore the
/// terminal afterward. A panic on the calling thread also restores the
/// terminal before the original panic hook reports it.
///
/// # Arguments
///
/// * `f` - The function to apply to the TUI.
///
/// # Returns
///
/// The result of applying `f` to the TUI.
///
/// # Errors
///
/// Any error that occurs while driving the TUI.
pub fn tui<F, T>(f: F) -> io::Result<T>
	where F: FnOnce(&mut Tui) -> io::Result<T>
{
	// The panic hook is process-wide, so the original is shared between this
	// function, which reinstates it, and the replacement, which delegates to
	// it.
	let original_hook = Arc::new(Mutex::new(Some(panic::take_hook())));
	let delegate = Arc::clone(&original_hook);
	let tui_thread = thread::current().id();
	panic::set_hook(Box::new(move |info| {
		if thread::current().id() == tui_thread
		{
			// Already panicking; nothing useful to do with a failure here.
			let _ = tui_restore();
		}
		if let Ok(hook) = delegate.lock()
		{
			if let Some(hook) = hook.as_ref()
			{
				hook(info);
			}
		}
	}));
	// Initialization can fail halfway, so restore unconditionally.
	let result = tui_init().and_then(|mut terminal| f(&mut terminal));
	if let Some(hook) = original_hook.lock().ok().and_then(|mut h| h.take())
	{
		panic::set_hook(hook);
	}
	tui_restore()?;
	result
}

/// Initialize the text-based user interface (TUI).
///
/// # Returns
///
/// The initialized TUI.
///
/// # Errors
///
/// Any error that occurs while initializing the TUI.
fn tui_init() -> io::Result<Tui>
{
	let mut stdout = stdout();
	execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
	enable_raw_mode()?;
	Terminal::new(CrosstermBackend::new(stdout))
}

/// Restore the terminal to its original state.
///
/// # Errors
///
/// Any error that occurs while restoring the terminal.
fn tui_restore() -> io::Result<()>
{
	let mut stdout = stdout();
	execute!(stdout, DisableMouseCapture, LeaveAlternateScreen)?;
	disable_raw_mode()?;
	CrosstermBackend::new(stdout).show_cursor()
}
