use log::{info, warn};
use uuid::Uuid;

use crate::{
    config::{ROUND_COUNT, SPEED_QUESTION_POINTS, SPEED_ROUND_LENGTH},
    models::{
        game::{
            sum_points, CategoryFilter, Multiplier, Question, SpeedQuestion, Team, TeamNames,
        },
        session::{FinalResult, GamePhase, GameSessionState},
    },
    storage::{kv::KeyValueStore, session_store::SessionStore},
};

/// Catalog entries 6 through 10 become the speed round, answered by their top answer.
pub fn speed_questions_from_catalog(catalog: &[Question]) -> Vec<SpeedQuestion> {
    catalog
        .iter()
        .skip(ROUND_COUNT)
        .take(SPEED_ROUND_LENGTH)
        .map(|question| SpeedQuestion {
            question: question.question.clone(),
            answer: question
                .answers
                .first()
                .map(|answer| answer.text.clone())
                .unwrap_or_default(),
            points: SPEED_QUESTION_POINTS,
        })
        .collect()
}

/// One playthrough: five main rounds, the speed round, then the final result.
///
/// The selection is read once when the session is built; `restart` replays it
/// without going back to storage.
pub struct GameSession {
    id: Uuid,
    questions: Vec<Question>,
    speed_questions: Vec<SpeedQuestion>,
    team_names: TeamNames,
    state: GameSessionState,
}

impl GameSession {
    pub fn new(
        questions: Vec<Question>,
        speed_questions: Vec<SpeedQuestion>,
        team_names: TeamNames,
    ) -> Self {
        let session = GameSession {
            id: Uuid::new_v4(),
            questions,
            speed_questions,
            team_names,
            state: GameSessionState::new(),
        };
        info!(
            "Game {} started with {} questions",
            session.id,
            session.questions.len()
        );
        session
    }

    pub fn load<S: KeyValueStore>(session_store: &SessionStore<S>) -> Self {
        let questions = session_store.get_selected_questions();
        let team_names = session_store.get_team_names();
        let catalog = session_store.questions().list(&CategoryFilter::All);
        GameSession::new(
            questions,
            speed_questions_from_catalog(&catalog),
            team_names,
        )
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn team_names(&self) -> &TeamNames {
        &self.team_names
    }

    pub fn state(&self) -> &GameSessionState {
        &self.state
    }

    /// `None` outside the main phase, or when the selection is short of this round.
    pub fn current_question(&self) -> Option<&Question> {
        if self.state.phase != GamePhase::Main {
            return None;
        }
        self.questions.get(self.state.round_index - 1)
    }

    pub fn current_speed_question(&self) -> Option<&SpeedQuestion> {
        if self.state.phase != GamePhase::Speed {
            return None;
        }
        self.speed_questions.get(self.state.speed_question_index)
    }

    /// Reveals an answer of the current question. Returns false when nothing changed.
    pub fn reveal_answer(&mut self, index: usize) -> bool {
        let answer_count = match self.current_question() {
            Some(question) => question.answers.len(),
            None => {
                warn!("Game {}: no question to reveal from", self.id);
                return false;
            }
        };
        if index >= answer_count {
            warn!("Game {}: answer {} out of range", self.id, index);
            return false;
        }
        self.state.revealed_answers.insert(index)
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.state.revealed_answers.contains(&index)
    }

    /// Sum of the points on the answers revealed so far this round.
    pub fn revealed_points(&self) -> u32 {
        match self.current_question() {
            Some(question) => sum_points(question, self.state.revealed_answers.iter().copied()),
            None => 0,
        }
    }

    pub fn set_multiplier(&mut self, multiplier: Multiplier) {
        self.state.multiplier = multiplier;
    }

    /// Credits `base_points` times the current multiplier. Returns the points credited.
    pub fn award_points(&mut self, team: Team, base_points: u32) -> u32 {
        if self.state.phase != GamePhase::Main {
            warn!("Game {}: points awarded outside the main rounds", self.id);
            return 0;
        }
        let points = self.state.multiplier.apply(base_points);
        self.state.scores.add(team, points);
        info!(
            "Game {}: {} got {} points",
            self.id,
            self.team_names.name(team),
            points
        );
        points
    }

    /// Awards the team exactly what is showing on the board.
    pub fn award_revealed(&mut self, team: Team) -> u32 {
        let base_points = self.revealed_points();
        self.award_points(team, base_points)
    }

    pub fn advance_round(&mut self) -> GamePhase {
        if self.state.phase != GamePhase::Main {
            warn!("Game {}: no round to advance in {:?}", self.id, self.state.phase);
            return self.state.phase;
        }

        if self.state.round_index < ROUND_COUNT {
            self.state.round_index += 1;
            self.state.revealed_answers.clear();
            self.state.multiplier = Multiplier::Single;
            if self.current_question().is_none() {
                warn!(
                    "Game {}: round {} has no question",
                    self.id, self.state.round_index
                );
            }
            info!("Game {}: round {}", self.id, self.state.round_index);
        } else {
            self.state.phase = GamePhase::Speed;
            self.state.speed_question_index = 0;
            info!("Game {}: speed round", self.id);
        }
        self.state.phase
    }

    pub fn advance_speed(&mut self) -> GamePhase {
        if self.state.phase != GamePhase::Speed {
            warn!("Game {}: not in the speed round", self.id);
            return self.state.phase;
        }

        self.state.speed_question_index += 1;
        if self.state.speed_question_index >= SPEED_ROUND_LENGTH {
            self.state.phase = GamePhase::Final;
            info!("Game {}: final result", self.id);
        }
        self.state.phase
    }

    /// Speed-round bonus hook. Nothing in the regular flow calls it, so the
    /// bonus stays zero unless an embedder opts in.
    pub fn credit_speed_bonus(&mut self, team: Team, points: u32) {
        if self.state.phase != GamePhase::Speed {
            warn!("Game {}: speed bonus outside the speed round", self.id);
            return;
        }
        self.state.speed_bonus.add(team, points);
    }

    pub fn final_result(&self) -> FinalResult {
        let mut totals = self.state.scores;
        totals.add(Team::Team1, self.state.speed_bonus.team1);
        totals.add(Team::Team2, self.state.speed_bonus.team2);
        FinalResult::from_totals(totals)
    }

    pub fn restart(&mut self) {
        self.state = GameSessionState::new();
        info!("Game {} restarted", self.id);
    }
}
