mod options;
mod terminal;

use std::io::{BufRead, Write};

use itertools::Itertools;
pub use options::ServerOptions;
pub use terminal::TerminalPresenter;

use crate::prelude::*;

/// A line protocol host for the engine: one command per input line, every reply closed by `ok`.
pub struct GameServer<W: Write> {
    engine: Option<Engine>,
    config: ServerOptions,
    out: W,
    done: bool,
}

impl GameServer<std::io::Stdout> {
    /// Produces a server that replies on stdout.
    pub fn new(options: ServerOptions) -> GameServer<std::io::Stdout> {
        GameServer::with_output(options, std::io::stdout())
    }
}

impl<W: Write> GameServer<W> {
    /// Produces a server that replies on the given stream.
    pub fn with_output(options: ServerOptions, out: W) -> GameServer<W> {
        GameServer { engine: None, config: options, out, done: false }
    }

    /// Serves commands from the input until it closes or a `quit` arrives.
    pub fn run(&mut self, input: impl BufRead) -> Result<()> {
        for line in input.lines() {
            let cmdstr = line?;
            let args: Vec<&str> = cmdstr.split_whitespace().collect();
            let cmd = args.first().copied().unwrap_or("");

            self.apply(cmd, args.get(1..).unwrap_or_default())?;
            if self.done {
                break;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// Runs a command. Only failures to write the reply are fatal.
    fn apply(&mut self, cmd: &str, args: &[&str]) -> Result<()> {
        let result = match cmd
        {
            | "" => Ok(()),
            | "board" => self.board(),
            | "info" => self.info(),
            | "move" => self.move_ball(args),
            | "newgame" => self.new_game(args),
            | "next" => self.next(),
            | "path" => self.path(args),
            | "quit" => { self.done = true; Ok(()) },
            | "score" => self.score(),
            | "setup" => self.setup(args),
            | "state" => self.state(),
            | "tap" => self.tap(args),
            | _ => Err(anyhow!("unrecognized command {cmd}")),
        };

        match result
        {
            Ok(_) => {
                log::debug!("Command completed successfully: {cmd} {}", args.join(" "));
                self.ok()
            },
            Err(err) => {
                log::warn!("encountered recoverable error:\n{err}");
                self.err(&err)
            },
        }
    }

    fn board(&mut self) -> Result<()> {
        let pretty = self.get()?.board().pretty();
        writeln!(self.out, "{pretty}")?;
        Ok(())
    }

    /// Starts a new game, seeded by the argument, the command line, or entropy, in that order.
    fn new_game(&mut self, args: &[&str]) -> Result<()> {
        let seed = match args.first() {
            Some(s) => Some(s.parse::<u64>().with_context(|| format!("invalid seed {s}"))?),
            None    => self.config.seed,
        };
        let mut engine = self.fresh_engine(seed)?;
        engine.new_game();

        let notation = engine.board().notate();
        self.engine = Some(engine);
        writeln!(self.out, "{notation}")?;
        Ok(())
    }

    /// Starts a game from a setup string, with no opening spawn. A rejected setup keeps the running game.
    fn setup(&mut self, args: &[&str]) -> Result<()> {
        let Some(setup) = args.first() else {
            return Err(anyhow!("no setup string provided"));
        };
        let setup = setup.parse::<SetupString>()?;
        let mut engine = self.fresh_engine(self.config.seed)?;
        engine.start_from(Board::from_setup(&setup))?;

        let notation = engine.board().notate();
        self.engine = Some(engine);
        writeln!(self.out, "{notation}")?;
        Ok(())
    }

    fn tap(&mut self, args: &[&str]) -> Result<()> {
        let [cell] = args else {
            return Err(anyhow!("expected a single cell to tap"));
        };
        let engine = self.get_mut()?;
        let index = cell.parse::<CellString>()?.resolve(engine.board().geometry())?;
        let outcome = engine.handle_cell_tap(index)?;
        self.report(&outcome)
    }

    /// Selects the ball at the first cell and taps the second, as a player would.
    fn move_ball(&mut self, args: &[&str]) -> Result<()> {
        let [from, to] = args else {
            return Err(anyhow!("expected a source and a destination cell"));
        };
        let engine = self.get_mut()?;
        let geometry = *engine.board().geometry();
        let [from, to] = [from, to].map(|c| c.parse::<CellString>().and_then(|c| c.resolve(&geometry)));
        let [from, to] = [from?, to?];

        if engine.board().is_empty(from) {
            return Err(anyhow!("there is no ball at cell {from} to move"));
        }
        if engine.selected() != Some(from) {
            engine.select_cell(from)?;
        }
        let outcome = engine.select_cell(to)?;
        self.report(&outcome)
    }

    fn path(&mut self, args: &[&str]) -> Result<()> {
        let [from, to] = args else {
            return Err(anyhow!("expected a source and a destination cell"));
        };
        let engine = self.get()?;
        let geometry = *engine.board().geometry();
        let [from, to] = [from, to].map(|c| c.parse::<CellString>().and_then(|c| c.resolve(&geometry)));
        let path = engine.find_path(from?, to?)?;

        match path {
            Some(path) => writeln!(self.out, "{}", path.notate())?,
            None       => writeln!(self.out, "blocked")?,
        };
        Ok(())
    }

    fn next(&mut self) -> Result<()> {
        let next = self.get()?.next_colors().iter().join("");
        writeln!(self.out, "{next}")?;
        Ok(())
    }

    fn score(&mut self) -> Result<()> {
        let Scoreboard { score, lines, level } = *self.get()?.scores();
        writeln!(self.out, "score {score} lines {lines} level {level}")?;
        Ok(())
    }

    fn state(&mut self) -> Result<()> {
        let engine = self.get()?;
        let state = match engine.state() {
            TurnState::Idle      => "idle",
            TurnState::Resolving => "resolving",
            TurnState::GameOver  => "gameover",
        };
        let selected = engine.selected().map_or("-".into(), |s| s.to_string());
        writeln!(self.out, "{state} {selected}")?;
        Ok(())
    }

    /// Prints what a tap did.
    fn report(&mut self, outcome: &TapOutcome) -> Result<()> {
        match outcome {
            TapOutcome::Ignored       => writeln!(self.out, "ignored")?,
            TapOutcome::Selected(i)   => writeln!(self.out, "selected {i}")?,
            TapOutcome::Deselected(i) => writeln!(self.out, "deselected {i}")?,
            TapOutcome::NoSelection   => writeln!(self.out, "noselection")?,
            TapOutcome::Moved(MoveOutcome::Ignored) => writeln!(self.out, "ignored")?,
            TapOutcome::Moved(MoveOutcome::Blocked) => writeln!(self.out, "blocked")?,
            TapOutcome::Moved(MoveOutcome::Completed(report)) => {
                writeln!(self.out, "path {}", report.path.notate())?;
                writeln!(self.out, "cleared {}", report.cleared.union(&report.spawn_cleared).notate())?;
                writeln!(self.out, "spawned {}", report.spawned.notate())?;
                writeln!(self.out, "points {}", report.points)?;
                if report.game_over {
                    writeln!(self.out, "gameover")?;
                }
            },
        };
        Ok(())
    }

    // accessors

    fn fresh_engine(&self, seed: Option<u64>) -> Result<Engine> {
        let mut engine = Engine::new(self.config.rules())?.with_presenter(TerminalPresenter);
        if self.config.animate {
            engine = engine.with_pacer(SleepPacing);
        }
        if let Some(seed) = seed {
            engine = engine.with_seed(seed);
        }
        Ok(engine)
    }

    /// Retrieves the engine in a shared context.
    fn get(&self) -> Result<&Engine> {
        self.engine.as_ref().ok_or(anyhow!("no game in progress"))
    }

    /// Retrieves the engine in a mutable context.
    fn get_mut(&mut self) -> Result<&mut Engine> {
        self.engine.as_mut().ok_or(anyhow!("no game in progress"))
    }

    // basic printers

    /// Prints the server's ID.
    fn info(&mut self) -> Result<()>
    {
        writeln!(
            self.out,
            "id {} v{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        )?;
        Ok(())
    }

    /// Prints an error to the protocol stream.
    fn err(&mut self, err: &Error) -> Result<()>
    {
        writeln!(self.out, "err\n{}", err)?;
        self.ok()
    }

    /// Prints the ok footer to the protocol stream.
    fn ok(&mut self) -> Result<()>
    {
        writeln!(self.out, "ok")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serve(script: &str) -> String {
        let mut server = GameServer::with_output(ServerOptions::default(), Vec::new());
        server.run(script.as_bytes()).unwrap();
        String::from_utf8(server.out).unwrap()
    }

    #[test]
    fn replies_end_with_ok() {
        let output = serve("info\n\nbogus\n");
        let lines = output.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], format!("id {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")));
        assert_eq!(lines[1..], ["ok", "ok", "err", "unrecognized command bogus", "ok"]);
    }

    #[test]
    fn blank_lines_are_acknowledged() {
        assert_eq!(serve("\n   \n\t\n"), "ok\nok\nok\n");
    }

    #[test]
    fn rejected_commands_keep_the_running_game() {
        let mut setup = ".".repeat(81);
        setup.replace_range(0..4, "RRRR");
        let output = serve(&format!("setup {setup}\nsetup R.Y.\nsetup R.Y\nnewgame x\nboard\nstate\n"));
        let lines = output.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], setup);
        assert_eq!(lines.iter().filter(|&&l| l == "err").count(), 3);
        assert!(lines.contains(&"board is 2x2 but the rules play on 9x9"));
        assert!(lines.contains(&"R R R R . . . . ."));
        assert!(lines.contains(&"idle -"));
    }

    #[test]
    fn commands_need_a_game() {
        let output = serve("board\n");
        assert_eq!(output, "err\nno game in progress\nok\n");
    }

    #[test]
    fn seeded_games_are_reproducible() {
        assert_eq!(serve("newgame 17\nnext\nboard\n"), serve("newgame 17\nnext\nboard\n"));
    }

    #[test]
    fn setup_and_play_a_line() {
        let mut setup = ".".repeat(81);
        setup.replace_range(0..4, "RRRR");
        setup.replace_range(49..50, "R");
        let output = serve(&format!("setup {setup}\nmove 5,4 0,4\nscore\nstate\n"));
        let lines = output.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], setup);
        assert!(lines.contains(&"cleared 0,1,2,3,4"));
        assert!(lines.contains(&"spawned "));
        assert!(lines.contains(&"points 50"));
        assert!(lines.contains(&"score 50 lines 1 level 1"));
        assert!(lines.contains(&"idle -"));
    }

    #[test]
    fn taps_and_paths() {
        let mut setup = ".".repeat(81);
        setup.replace_range(0..2, "GB");
        setup.replace_range(9..10, "B");
        let output = serve(&format!("setup {setup}\npath 0 80\ntap 0\nstate\ntap 40\ntap 0,0\ntap 99\nquit\nboard\n"));
        let lines = output.lines().collect::<Vec<_>>();

        assert_eq!(lines[1..], [
            "ok",
            "blocked", "ok",
            "selected 0", "ok",
            "idle 0", "ok",
            "blocked", "ok",
            "deselected 0", "ok",
            "err", "invalid cell index 99 on a 9x9 board", "ok",
            "ok",
        ]);
    }
}
