use log::info;

/// Receives the points awarded when the human wins a game.
pub trait ScoreReporter {
    fn on_game_end(&mut self, points: u32);
}

impl<F> ScoreReporter for F
where
    F: FnMut(u32),
{
    fn on_game_end(&mut self, points: u32) {
        self(points)
    }
}

/// Logs each award and keeps a running total for display.
#[derive(Debug, Default)]
pub struct LogScoreReporter {
    total_points: u32,
    games_won: u32,
}

impl LogScoreReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_points(&self) -> u32 {
        self.total_points
    }

    pub fn games_won(&self) -> u32 {
        self.games_won
    }
}

impl ScoreReporter for LogScoreReporter {
    fn on_game_end(&mut self, points: u32) {
        self.total_points += points;
        self.games_won += 1;
        info!(
            "awarded {} points ({} total over {} won games)",
            points, self.total_points, self.games_won
        );
    }
}
