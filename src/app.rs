//! # Application
//!
//! The application state and logic, including the text-based user interface
//! (TUI). A game runs through three visible phases: the timed round, the
//! end-of-round solve, and the review of missed words.

use std::{
	collections::BTreeSet,
	io,
	mem::swap,
	rc::Rc,
	time::{Duration, Instant}
};

use boggle::{
	dictionary::Lexicon,
	grid::{Grid, Position},
	round::{Rejection, Round},
	scoring::score,
	solver::{find_words, Solver}
};
use crossterm::event::{
	poll, read, Event, KeyCode, KeyEvent, KeyEventKind,
	MouseButton, MouseEvent, MouseEventKind
};
use log::{debug, info, trace};
use ratatui::{
	buffer::Buffer,
	layout::{Alignment, Constraint, Layout, Margin, Rect},
	style::{Color, Style, Stylize},
	text::{Line, Span},
	widgets::{
		block::{Position as TitlePosition, Title},
		Block, BorderType, Borders, List, ListState, Paragraph,
		StatefulWidget, Widget
	},
	Frame
};

use crate::tui::Tui;

/// The width of a rendered cell, borders included.
const CELL_WIDTH: u16 = 7;

/// The height of a rendered cell, borders included.
const CELL_HEIGHT: u16 = 3;

/// How long the end-of-round solver may run per iteration of the main loop.
const SOLVER_SLICE: Duration = Duration::from_millis(5);

////////////////////////////////////////////////////////////////////////////////
//                                Application.                                //
////////////////////////////////////////////////////////////////////////////////

/// The application state.
#[must_use]
pub struct App
{
	/// The phase of the game.
	state: ExecutionState,

	/// The dictionary against which words are judged.
	dictionary: Rc<dyn Lexicon>,

	/// The area of the most recently drawn frame, for resolving mouse
	/// coordinates to cells.
	area: Rect,

	/// The keyboard cursor.
	cursor: Position
}

/// The outcome of a game, available once the application exits.
#[derive(Clone, Debug)]
pub struct Summary
{
	/// The grid that was played.
	pub grid: Grid,

	/// The final score.
	pub score: u32,

	/// The words found, in the order they were found.
	pub found: Vec<String>,

	/// The solvable words that were not found, in alphabetical order.
	pub missed: Vec<String>
}

// Public interface.
impl App
{
	/// Create a new application state. The round clock starts immediately.
	///
	/// # Arguments
	///
	/// * `dictionary` - The dictionary against which words are judged.
	/// * `grid` - The grid to play.
	/// * `duration` - How long the round lasts.
	///
	/// # Returns
	///
	/// The new application state.
	pub fn new(dictionary: Rc<dyn Lexicon>, grid: Grid, duration: Duration)
		-> Self
	{
		Self {
			state: ExecutionState::Playing {
				round: Round::new(grid),
				deadline: Instant::now() + duration,
				last: None
			},
			dictionary,
			area: Rect::default(),
			cursor: Position::new(0, 0)
		}
	}

	/// Run the application. This amounts to:
	///
	/// * Running any background tasks, such as the round clock or the solver.
	/// * Rendering the application frame.
	/// * Processing events.
	///
	/// # Arguments
	///
	/// * `tui` - The text-based user interface (TUI).
	///
	/// # Returns
	///
	/// The summary of the game.
	///
	/// # Errors
	///
	/// Any error that occurs while running the application.
	pub fn run(mut self, tui: &mut Tui) -> io::Result<Summary>
	{
		while self.is_running()
		{
			self.process_systems();
			let completed = tui.draw(|frame| self.render_frame(frame))?;
			self.area = completed.area;
			self.process_event()?;
		}
		match self.state
		{
			ExecutionState::Exiting { summary } => Ok(summary),
			_ => unreachable!()
		}
	}

	/// Check if the application is running.
	///
	/// # Returns
	///
	/// `true` if the application is running, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn is_running(&self) -> bool
	{
		!matches!(self.state, ExecutionState::Exiting { .. })
	}
}

// Private implementation details.
impl App
{
	/// Move the cursor by the given deltas, saturating at the edges of the
	/// grid.
	///
	/// # Arguments
	///
	/// * `dr` - The change in the row.
	/// * `dc` - The change in the column.
	fn move_cursor(&mut self, dr: isize, dc: isize)
	{
		let dimension = match self.state
		{
			ExecutionState::Playing { ref round, .. } => round.grid().dimension(),
			_ => return
		};
		let row = self.cursor.row.saturating_add_signed(dr);
		let column = self.cursor.column.saturating_add_signed(dc);
		if row < dimension && column < dimension
		{
			self.cursor = Position::new(row, column);
		}
	}

	/// Resolve terminal coordinates to the cell drawn there, if any.
	///
	/// # Arguments
	///
	/// * `column` - The terminal column.
	/// * `row` - The terminal row.
	///
	/// # Returns
	///
	/// The cell under the coordinates, or `None` if they fall outside the
	/// board.
	#[must_use]
	fn cell_at(&self, column: u16, row: u16) -> Option<Position>
	{
		let dimension = match self.state
		{
			ExecutionState::Playing { ref round, .. } => round.grid().dimension(),
			_ => return None
		};
		let board = Regions::new(self.area).board;
		board_cells(board, dimension).iter()
			.position(|r| {
				column >= r.x && column < r.x + r.width
					&& row >= r.y && row < r.y + r.height
			})
			.map(|index| Position::new(index / dimension, index % dimension))
	}

	/// Submit the current path, remembering the outcome for display.
	fn submit(&mut self)
	{
		if let ExecutionState::Playing { ref mut round, ref mut last, .. } =
			self.state
		{
			if round.selection().path().is_empty()
			{
				return
			}
			let (word, outcome) = round.submit_selection(&*self.dictionary);
			match outcome
			{
				Ok(points) => debug!("{} accepted for {}", word, points),
				Err(rejection) => debug!("{} rejected: {}", word, rejection)
			}
			*last = Some((word, outcome));
		}
	}

	/// Move the highlight through the missed words. If nothing is highlighted,
	/// use the sign of the change to determine which end of the list to start
	/// from, i.e., positive for the beginning and negative for the end.
	///
	/// If the change would move the highlight out of bounds, remove it.
	///
	/// # Arguments
	///
	/// * `di` - The change in the word index.
	fn move_highlight(&mut self, di: isize)
	{
		if let ExecutionState::Finished { ref missed, ref mut highlight, .. } =
			self.state
		{
			let next = match *highlight
			{
				Some(index) => index.checked_add_signed(di),
				None if di > 0 => Some(di as usize - 1),
				None => missed.len().checked_add_signed(di)
			};
			*highlight = next.filter(|&index| index < missed.len());
		}
	}

	/// Render the application frame.
	///
	/// # Arguments
	///
	/// * `frame` - The target frame.
	fn render_frame(&self, frame: &mut Frame)
	{
		frame.render_widget(self, frame.area());
	}

	/// Render the board: one bordered cell per letter. Cells on `path` are
	/// numbered in path order; the cursor, if any, is shown in reverse video.
	///
	/// # Arguments
	///
	/// * `grid` - The grid.
	/// * `area` - The target area.
	/// * `buf` - The target buffer.
	/// * `path` - The cells to mark.
	/// * `cursor` - The keyboard cursor, if it should be shown.
	fn render_board(
		&self,
		grid: &Grid,
		area: Rect,
		buf: &mut Buffer,
		path: &[Position],
		cursor: Option<Position>
	) {
		let cells = board_cells(area, grid.dimension());
		for (position, rect) in grid.positions().zip(cells.iter())
		{
			let step = path.iter().position(|&p| p == position);
			let style = match step
			{
				Some(_) => Style::default().fg(Color::Black).bg(Color::Green),
				None if cursor == Some(position) =>
					Style::default().fg(Color::Black).bg(Color::Cyan),
				None => Style::default()
			};
			let mut block = Block::new()
				.border_type(BorderType::Rounded)
				.borders(Borders::ALL)
				.border_style(Style::default().fg(Color::White));
			if let Some(step) = step
			{
				block = block.title(
					Title::default()
						.content((step + 1).to_string())
						.alignment(Alignment::Right)
				);
			}
			Paragraph::new(grid[position].to_string())
				.block(block)
				.alignment(Alignment::Center)
				.style(style)
				.render(*rect, buf);
		}
	}

	/// Render the [playing](ExecutionState::Playing) UI.
	///
	/// # Arguments
	///
	/// * `area` - The target area.
	/// * `buf` - The target buffer.
	/// * `round` - The round in progress.
	/// * `deadline` - When the round ends.
	/// * `last` - The most recent submission and its outcome.
	fn render_playing(
		&self,
		area: Rect,
		buf: &mut Buffer,
		round: &Round,
		deadline: Instant,
		last: Option<&(String, Result<u32, Rejection>)>
	) {
		let regions = Regions::new(area);
		let remaining = deadline.saturating_duration_since(Instant::now());
		let clock = format!(
			"{}:{:02}",
			remaining.as_secs() / 60,
			remaining.as_secs() % 60
		);
		Block::default()
			.borders(Borders::ALL)
			.border_style(Style::default().fg(Color::White))
			.title(
				Title::default()
					.content(round.grid().size().to_string())
					.position(TitlePosition::Top)
					.alignment(Alignment::Center)
			)
			.title(
				Title::default()
					.content("⎋ – exit".yellow().bold())
					.position(TitlePosition::Top)
					.alignment(Alignment::Left)
			)
			.title(
				Title::default()
					.content(Span::from(clock).green().bold())
					.position(TitlePosition::Top)
					.alignment(Alignment::Right)
			)
			.title(
				Title::default()
					.content(
						"\
							←↑↓→ - move \
							␣ - select \
							↵ - submit \
							⌫ - clear \
							⇥ - end round\
						".cyan()
					)
					.position(TitlePosition::Bottom)
					.alignment(Alignment::Center)
			)
			.render(regions.board, buf);
		self.render_board(
			round.grid(),
			regions.board,
			buf,
			round.selection().path(),
			Some(self.cursor)
		);
		// The status line shows the word under construction, or failing that,
		// the fate of the last submission.
		let word = round.selection().word(round.grid());
		let status = if !word.is_empty()
		{
			Line::from(Span::from(word.as_str().to_string()).white().bold())
		}
		else
		{
			match last
			{
				Some((word, Ok(points))) =>
					Line::from(Span::from(format!("{} +{}", word, points)).green()),
				Some((word, Err(rejection))) =>
					Line::from(Span::from(format!("{}: {}", word, rejection)).red()),
				None => Line::default()
			}
		};
		Paragraph::new(status)
			.block(Block::default().borders(Borders::ALL))
			.alignment(Alignment::Center)
			.render(regions.status, buf);
		// The found words, most recent first.
		let list = List::new(
			round.found().iter().rev()
				.map(|w| format!("{:<16}{:>3}", w, score(w)))
		)
			.block(
				Block::default()
					.title(format!("Score {}", round.score()))
					.title_alignment(Alignment::Center)
					.borders(Borders::ALL)
			)
			.style(Style::default().fg(Color::White));
		Widget::render(&list, regions.words, buf);
	}

	/// Render the [solving](ExecutionState::Solving) UI.
	///
	/// # Arguments
	///
	/// * `area` - The target area.
	/// * `buf` - The target buffer.
	/// * `round` - The round just ended.
	/// * `solver` - The solver.
	fn render_solving(
		&self,
		area: Rect,
		buf: &mut Buffer,
		round: &Round,
		solver: &Solver
	) {
		let regions = Regions::new(area);
		Block::default()
			.borders(Borders::ALL)
			.border_style(Style::default().fg(Color::White))
			.title(
				Title::default()
					.content("Time!")
					.position(TitlePosition::Top)
					.alignment(Alignment::Center)
			)
			.title(
				Title::default()
					.content("⎋ – exit".yellow().bold())
					.position(TitlePosition::Top)
					.alignment(Alignment::Left)
			)
			.render(regions.board, buf);
		self.render_board(round.grid(), regions.board, buf, &[], None);
		Paragraph::new(format!("Solving… {} words", solver.word_count()))
			.block(Block::default().borders(Borders::ALL))
			.alignment(Alignment::Center)
			.render(regions.status, buf);
		let list = List::new(round.found().iter().map(String::as_str))
			.block(
				Block::default()
					.title(format!("Score {}", round.score()))
					.title_alignment(Alignment::Center)
					.borders(Borders::ALL)
			)
			.style(Style::default().fg(Color::White));
		Widget::render(&list, regions.words, buf);
	}

	/// Render the [finished](ExecutionState::Finished) UI.
	///
	/// # Arguments
	///
	/// * `area` - The target area.
	/// * `buf` - The target buffer.
	/// * `round` - The round just ended.
	/// * `missed` - The missed words.
	/// * `highlight` - The index of the missed word to highlight, if any.
	fn render_finished(
		&self,
		area: Rect,
		buf: &mut Buffer,
		round: &Round,
		missed: &[String],
		highlight: Option<usize>
	) {
		let regions = Regions::new(area);
		Block::default()
			.borders(Borders::ALL)
			.border_style(Style::default().fg(Color::White))
			.title(
				Title::default()
					.content("Review")
					.position(TitlePosition::Top)
					.alignment(Alignment::Center)
			)
			.title(
				Title::default()
					.content("⎋ – exit".yellow().bold())
					.position(TitlePosition::Top)
					.alignment(Alignment::Left)
			)
			.render(regions.board, buf);
		let path = highlight
			.and_then(|index| missed.get(index))
			.and_then(|word| round.grid().trace(word))
			.unwrap_or_default();
		self.render_board(round.grid(), regions.board, buf, &path, None);
		Paragraph::new(format!(
			"Score {}: found {} of {}",
			round.score(),
			round.found().len(),
			round.found().len() + missed.len()
		))
			.block(Block::default().borders(Borders::ALL))
			.alignment(Alignment::Center)
			.render(regions.status, buf);
		let mut list_state = ListState::default();
		list_state.select(highlight);
		let list = List::new(missed.iter().map(String::as_str))
			.block(
				Block::default()
					.borders(Borders::ALL)
					.title(
						Title::default()
							.content("Missed")
							.alignment(Alignment::Center)
					)
					.title(
						Title::default()
							.content("↑↓ - move".cyan())
							.position(TitlePosition::Bottom)
							.alignment(Alignment::Center)
					)
			)
			.style(Style::default().fg(Color::White))
			.highlight_style(
				Style::default()
					.fg(Color::Black)
					.bg(Color::Cyan)
				);
		StatefulWidget::render(&list, regions.words, buf, &mut list_state);
	}

	/// Run any background tasks, such as the round clock or the solver.
	fn process_systems(&mut self)
	{
		match self.state
		{
			ExecutionState::Swapping => unreachable!(),
			ExecutionState::Playing { deadline, .. } =>
			{
				if Instant::now() >= deadline
				{
					info!("time is up");
					self.end_round();
				}
			},
			ExecutionState::Solving { .. } => self.run_solver(),
			ExecutionState::Finished { .. } => {}
			ExecutionState::Exiting { .. } => {}
		}
	}

	/// End the round and start the solver. Only meaningful while
	/// [playing](ExecutionState::Playing).
	fn end_round(&mut self)
	{
		let mut state = ExecutionState::Swapping;
		swap(&mut self.state, &mut state);
		self.state = match state
		{
			ExecutionState::Playing { round, .. } =>
			{
				debug!(
					"round over: {} words for {} points",
					round.found().len(),
					round.score()
				);
				let solver = Solver::new(
					self.dictionary.clone(),
					round.grid().clone()
				);
				ExecutionState::Solving { round, solver }
			},
			state => state
		};
	}

	/// Run the solver for a short while.
	fn run_solver(&mut self)
	{
		// Take care to evacuate the application state in order to keep the
		// borrow happy while juggling state ownership and mutable references.
		let mut state = ExecutionState::Swapping;
		swap(&mut self.state, &mut state);
		if let ExecutionState::Solving { round, solver } = state
		{
			// Run the solver for only a short while, lest the application
			// become unresponsive.
			let (solver, word) = solver.solve(SOLVER_SLICE);
			if let Some(word) = word
			{
				trace!("solver found {}", word);
			}
			if solver.is_finished()
			{
				let missed = round.missed_words(solver.words());
				debug!("solved: {} missed words", missed.len());
				self.state = ExecutionState::Finished {
					round,
					missed,
					highlight: None
				};
			}
			else
			{
				self.state = ExecutionState::Solving { round, solver };
			}
		}
		else
		{
			unreachable!()
		}
	}

	/// Process events. Block for only half a millisecond, so as not to stall
	/// any background tasks.
	///
	/// # Errors
	///
	/// Any error that occurs while processing events.
	fn process_event(&mut self) -> io::Result<()>
	{
		if poll(Duration::from_micros(500))?
		{
			match read()?
			{
				Event::Key(event) if event.kind == KeyEventKind::Press =>
					self.process_key_event(event),
				Event::Mouse(event) => self.process_mouse_event(event),
				_ => {}
			}
		}
		Ok(())
	}

	/// Process a key event according to the phase of the game.
	///
	/// # Arguments
	///
	/// * `event` - The key event to process.
	fn process_key_event(&mut self, event: KeyEvent)
	{
		match self.state
		{
			ExecutionState::Swapping => unreachable!(),
			ExecutionState::Playing { .. } =>
				self.process_key_event_playing(event),
			ExecutionState::Solving { .. } =>
				self.process_key_event_solving(event),
			ExecutionState::Finished { .. } =>
				self.process_key_event_finished(event),
			ExecutionState::Exiting { .. } => {}
		}
	}

	/// Process a key event while [playing](ExecutionState::Playing):
	///
	/// * Escape - Exit the application.
	/// * Up - Move the cursor up.
	/// * Down - Move the cursor down.
	/// * Left - Move the cursor left.
	/// * Right - Move the cursor right.
	/// * Space - Select the cell under the cursor.
	/// * Enter - Submit the path.
	/// * Backspace/Delete - Clear the path.
	/// * Tab - End the round early.
	///
	/// # Arguments
	///
	/// * `event` - The key event to process.
	fn process_key_event_playing(&mut self, event: KeyEvent)
	{
		match event.code
		{
			KeyCode::Esc => self.exit(),
			KeyCode::Up => self.move_cursor(-1, 0),
			KeyCode::Down => self.move_cursor(1, 0),
			KeyCode::Left => self.move_cursor(0, -1),
			KeyCode::Right => self.move_cursor(0, 1),
			KeyCode::Char(' ') =>
			{
				let cursor = self.cursor;
				if let ExecutionState::Playing { ref mut round, .. } = self.state
				{
					round.selection_mut().select(Some(cursor));
				}
			},
			KeyCode::Enter => self.submit(),
			KeyCode::Backspace | KeyCode::Delete =>
			{
				if let ExecutionState::Playing { ref mut round, .. } = self.state
				{
					round.selection_mut().clear();
				}
			},
			KeyCode::Tab => self.end_round(),
			_ => {}
		}
	}

	/// Process a key event while [solving](ExecutionState::Solving):
	///
	/// * Escape - Exit the application.
	///
	/// # Arguments
	///
	/// * `event` - The key event to process.
	fn process_key_event_solving(&mut self, event: KeyEvent)
	{
		if let KeyCode::Esc = event.code {
			self.exit()
		}
	}

	/// Process a key event while [reviewing](ExecutionState::Finished) the
	/// missed words:
	///
	/// * Escape - Exit the application.
	/// * Up - Highlight the previous word.
	/// * Down - Highlight the next word.
	///
	/// # Arguments
	///
	/// * `event` - The key event to process.
	fn process_key_event_finished(&mut self, event: KeyEvent)
	{
		match event.code
		{
			KeyCode::Esc => self.exit(),
			KeyCode::Up => self.move_highlight(-1),
			KeyCode::Down => self.move_highlight(1),
			_ => {}
		}
	}

	/// Process a mouse event. Only the left button matters, and only while
	/// [playing](ExecutionState::Playing): pressing starts a path, dragging
	/// extends or retracts it, and releasing after a drag submits it.
	///
	/// # Arguments
	///
	/// * `event` - The mouse event to process.
	fn process_mouse_event(&mut self, event: MouseEvent)
	{
		let target = self.cell_at(event.column, event.row);
		let submit =
			if let ExecutionState::Playing { ref mut round, .. } = self.state
			{
				let selection = round.selection_mut();
				match event.kind
				{
					MouseEventKind::Down(MouseButton::Left) =>
					{
						selection.press(target);
						false
					},
					MouseEventKind::Drag(MouseButton::Left) =>
					{
						selection.drag(target);
						false
					},
					MouseEventKind::Up(MouseButton::Left) => selection.release(),
					_ => false
				}
			}
			else
			{
				false
			};
		if submit
		{
			self.submit();
		}
	}

	/// Mark the application for exit. The application will exit after the next
	/// iteration of the main loop. Leaving before the review still solves the
	/// grid, so that the summary is complete.
	fn exit(&mut self)
	{
		let mut state = ExecutionState::Swapping;
		swap(&mut self.state, &mut state);
		self.state = match state
		{
			ExecutionState::Swapping => unreachable!(),
			ExecutionState::Playing { round, .. } =>
			{
				let solved = find_words(round.grid(), self.dictionary.clone());
				ExecutionState::Exiting { summary: summarize(round, &solved) }
			},
			ExecutionState::Solving { round, solver } =>
			{
				let solved = solver.solve_fully().into_words();
				ExecutionState::Exiting { summary: summarize(round, &solved) }
			},
			ExecutionState::Finished { round, missed, .. } =>
				ExecutionState::Exiting {
					summary: Summary {
						grid: round.grid().clone(),
						score: round.score(),
						found: round.found().to_vec(),
						missed
					}
				},
			state @ ExecutionState::Exiting { .. } => state
		};
	}

	/// Get the round, whatever the phase.
	///
	/// # Returns
	///
	/// The round, or `None` once the application is exiting.
	#[cfg(test)]
	#[must_use]
	fn round(&self) -> Option<&Round>
	{
		match self.state
		{
			ExecutionState::Playing { ref round, .. }
			| ExecutionState::Solving { ref round, .. }
			| ExecutionState::Finished { ref round, .. } => Some(round),
			_ => None
		}
	}
}

impl Widget for &App
{
	fn render(self, area: Rect, buf: &mut Buffer)
	{
		match self.state
		{
			ExecutionState::Swapping => unreachable!(),
			ExecutionState::Playing { ref round, deadline, ref last } =>
				self.render_playing(area, buf, round, deadline, last.as_ref()),
			ExecutionState::Solving { ref round, ref solver } =>
				self.render_solving(area, buf, round, solver),
			ExecutionState::Finished { ref round, ref missed, highlight } =>
				self.render_finished(area, buf, round, missed, highlight),
			ExecutionState::Exiting { .. } => {}
		}
	}
}

/// Build the summary of a round.
///
/// # Arguments
///
/// * `round` - The round.
/// * `solved` - Every word that can be formed on the round's grid.
///
/// # Returns
///
/// The summary.
fn summarize(round: Round, solved: &BTreeSet<String>) -> Summary
{
	Summary {
		missed: round.missed_words(solved),
		grid: round.grid().clone(),
		score: round.score(),
		found: round.found().to_vec()
	}
}

/// The execution state of the application.
#[derive(Clone, Debug)]
enum ExecutionState
{
	/// The application state is transitioning to the next state. This is a
	/// transient state that should not be rendered.
	Swapping,

	/// The round is underway.
	Playing {
		/// The round.
		round: Round,

		/// When the round ends.
		deadline: Instant,

		/// The most recent submission and its outcome.
		last: Option<(String, Result<u32, Rejection>)>
	},

	/// The round is over and the solver is running, incrementally collecting
	/// every word on the grid.
	Solving {
		/// The round just ended.
		round: Round,

		/// The solver for the grid.
		solver: Solver
	},

	/// The solver has finished, and the player is reviewing the missed words.
	Finished {
		/// The round just ended.
		round: Round,

		/// The solvable words that were not found.
		missed: Vec<String>,

		/// The index of the missed word to highlight.
		highlight: Option<usize>
	},

	/// The application is exiting.
	Exiting {
		/// The outcome of the game.
		summary: Summary
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                  Layout.                                   //
////////////////////////////////////////////////////////////////////////////////

/// The regions of the screen.
#[derive(Copy, Clone, Debug)]
struct Regions
{
	/// The board, including its frame.
	board: Rect,

	/// The status line beneath the board.
	status: Rect,

	/// The word list beside the board.
	words: Rect
}

impl Regions
{
	/// Divide the screen into regions. Rendering and mouse resolution both go
	/// through here, so they always agree on where the cells are.
	///
	/// # Arguments
	///
	/// * `area` - The whole screen.
	///
	/// # Returns
	///
	/// The regions.
	fn new(area: Rect) -> Self
	{
		let [left, words] = Layout::horizontal([
			Constraint::Fill(1),
			Constraint::Length(26)
		])
			.margin(1)
			.areas(area);
		let [board, status] = Layout::vertical([
			Constraint::Fill(1),
			Constraint::Length(3)
		])
			.areas(left);
		Self { board, status, words }
	}
}

/// Lay out the cells of a square board, centered within the framed board
/// region.
///
/// # Arguments
///
/// * `board` - The board region, including its frame.
/// * `dimension` - The number of rows (and columns).
///
/// # Returns
///
/// The cell rectangles, in row-major order.
fn board_cells(board: Rect, dimension: usize) -> Vec<Rect>
{
	let inner = board.inner(Margin::new(1, 1));
	let centered = |fixed: Constraint| {
		std::iter::once(Constraint::Fill(1))
			.chain(std::iter::repeat(fixed).take(dimension))
			.chain(std::iter::once(Constraint::Fill(1)))
			.collect::<Vec<_>>()
	};
	let rows = Layout::vertical(centered(Constraint::Length(CELL_HEIGHT)))
		.split(inner);
	let columns = Layout::horizontal(centered(Constraint::Length(CELL_WIDTH)))
		.split(inner);
	rows[1 ..= dimension].iter()
		.flat_map(|row| {
			columns[1 ..= dimension].iter()
				.map(move |column| {
					Rect::new(column.x, row.y, column.width, row.height)
				})
		})
		.collect()
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
