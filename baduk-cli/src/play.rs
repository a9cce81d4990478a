use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::{info, warn};

use baduk_engine::{Board, Engine, Point, SIZE, Stone};

use crate::config::Config;

struct Game {
    board: Board,
    ko: Option<Point>,
    cursor: Point,
    human: Stone,
    consecutive_passes: u32,
    /// Prisoners taken, indexed by the capturing color.
    captures_black: u32,
    captures_white: u32,
}

impl Game {
    fn new(human: Stone) -> Self {
        Game {
            board: Board::new(),
            ko: None,
            cursor: (4, 4),
            human,
            consecutive_passes: 0,
            captures_black: 0,
            captures_white: 0,
        }
    }

    fn over(&self) -> bool {
        self.consecutive_passes >= 2
    }

    fn apply(&mut self, point: Point, stone: Stone) -> Result<(), String> {
        if self.ko == Some(point) {
            return Err("that point is locked by ko".into());
        }
        let (next, captured) = self
            .board
            .place(point, stone)
            .map_err(|e| e.to_string())?;
        self.ko = next.ko_from_capture(point, stone, &captured);
        self.board = next;
        self.consecutive_passes = 0;
        match stone {
            Stone::Black => self.captures_black += captured.len() as u32,
            Stone::White => self.captures_white += captured.len() as u32,
        }
        Ok(())
    }

    fn pass(&mut self) {
        self.consecutive_passes += 1;
        self.ko = None;
    }

    fn engine_turn(&mut self, engine: &mut dyn Engine) {
        let stone = self.human.opp();
        match engine.select_move(&self.board, stone, self.ko) {
            Some(point) => {
                info!(?point, %stone, "engine plays");
                if let Err(reason) = self.apply(point, stone) {
                    warn!(?point, %reason, "engine proposed an illegal move; passing");
                    self.pass();
                }
            }
            None => {
                info!(%stone, "engine passes");
                self.pass();
            }
        }
    }

    fn draw(&self, out: &mut impl Write) -> io::Result<()> {
        // Clear screen, home cursor.
        write!(out, "\x1b[H\x1b[2J")?;
        write!(out, "   ")?;
        for col in 0..SIZE {
            write!(out, " {}  ", col + 1)?;
        }
        writeln!(out)?;
        writeln!(out, "  ┌{}┐", vec!["───"; SIZE as usize].join("┬"))?;
        for row in 0..SIZE {
            write!(out, "{} │", row + 1)?;
            for col in 0..SIZE {
                let glyph = self
                    .board
                    .stone_at((row, col))
                    .map_or(' ', Stone::glyph);
                if (row, col) == self.cursor {
                    write!(out, "[{glyph}]│")?;
                } else {
                    write!(out, " {glyph} │")?;
                }
            }
            writeln!(out)?;
            if row + 1 < SIZE {
                writeln!(out, "  ├{}┤", vec!["───"; SIZE as usize].join("┼"))?;
            }
        }
        writeln!(out, "  └{}┘", vec!["───"; SIZE as usize].join("┴"))?;
        writeln!(
            out,
            "You are {}. Prisoners: Black {}, White {}.",
            self.human, self.captures_black, self.captures_white
        )?;
        if let Some((row, col)) = self.ko {
            writeln!(out, "Ko at ({}, {}).", row + 1, col + 1)?;
        }
        out.flush()
    }
}

pub fn run(config: &Config) -> Result<()> {
    let human: Stone = config.human.into();
    let mut engine = config.build_engine(config.engine);
    let mut game = Game::new(human);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    // White engine opens if the human took Black's opponent.
    if human == Stone::White {
        game.engine_turn(engine.as_mut());
    }
    game.draw(&mut stdout)?;
    prompt(&mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "h" => game.cursor.1 = game.cursor.1.saturating_sub(1),
            "l" => game.cursor.1 = (game.cursor.1 + 1).min(SIZE - 1),
            "k" => game.cursor.0 = game.cursor.0.saturating_sub(1),
            "j" => game.cursor.0 = (game.cursor.0 + 1).min(SIZE - 1),
            "p" => match game.apply(game.cursor, human) {
                Ok(()) => game.engine_turn(engine.as_mut()),
                Err(reason) => {
                    game.draw(&mut stdout)?;
                    writeln!(stdout, "Illegal move: {reason}")?;
                    prompt(&mut stdout)?;
                    continue;
                }
            },
            "s" => {
                game.pass();
                if !game.over() {
                    game.engine_turn(engine.as_mut());
                }
            }
            "q" => break,
            _ => {}
        }

        game.draw(&mut stdout)?;
        if game.over() {
            let (black, white) = game.board.score();
            writeln!(stdout, "Both sides passed. Score: Black {black}, White {white}.")?;
            break;
        }
        prompt(&mut stdout)?;
    }

    Ok(())
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "Move (h/j/k/l to move, p to place, s to pass, q to quit): ")?;
    out.flush()
}
