use chrono::Utc;

use engine::bot_controller::{self, BotInput};
use engine::{
    Action, Game, GameError, GameId, GameStatus, Party, PartySlot, SessionRng, log, snapshot,
};

use crate::config::ServiceConfig;
use crate::repository::{GameRepository, MoveRecord, MoveRepository};

/// The request/response boundary: every operation loads through the
/// game port, runs the engine, and persists the result. Human and COM
/// actions go through the same apply path.
pub struct GameService<G, M> {
    games: G,
    moves: M,
    rng: SessionRng,
    config: ServiceConfig,
}

impl<G, M> GameService<G, M>
where
    G: GameRepository,
    M: MoveRepository,
{
    pub fn new(games: G, moves: M) -> Self {
        Self::with_config(games, moves, SessionRng::from_random(), ServiceConfig::default())
    }

    pub fn with_config(games: G, moves: M, rng: SessionRng, config: ServiceConfig) -> Self {
        Self {
            games,
            moves,
            rng,
            config,
        }
    }

    pub fn create_game(&mut self, party_a: PartySlot, party_b: PartySlot) -> Result<Game, GameError> {
        let game = self.games.create(Game::new(party_a, party_b))?;
        log!("game {} created", game.id);
        Ok(game)
    }

    pub fn start_game(&mut self, id: GameId) -> Result<Game, GameError> {
        let mut game = self.games.get(id)?;
        game.start()?;
        self.games.update(&game)?;
        log!("game {} started", id);
        Ok(game)
    }

    pub fn submit_action(
        &mut self,
        id: GameId,
        party: Party,
        action: &Action,
    ) -> Result<Game, GameError> {
        let mut game = self.games.get(id)?;
        self.apply_action(&mut game, party, action)?;
        Ok(game)
    }

    /// Decides and plays one turn for the COM side to move. Fails when
    /// the game is not running or the party to move is not a COM slot.
    pub fn process_com_turn(&mut self, id: GameId) -> Result<Game, GameError> {
        let mut game = self.games.get(id)?;
        if game.status != GameStatus::Playing {
            return Err(GameError::State(format!(
                "game is not playing ({})",
                game.status.as_str()
            )));
        }

        let party = game.state.turn_party;
        let Some(level) = game.slot(party).com_level() else {
            return Err(GameError::State("party to move is not a COM".to_string()));
        };

        let input = BotInput::from_game_state(&game.state, party);
        let action = bot_controller::calculate_action(level, &input, &mut self.rng);
        log!(
            "game {}: COM level {} plays {} as {}",
            id,
            level.as_str(),
            action.kind.as_str(),
            party
        );
        self.apply_action(&mut game, party, &action)?;
        Ok(game)
    }

    pub fn get_game(&self, id: GameId) -> Result<Game, GameError> {
        self.games.get(id)
    }

    pub fn list_games(&self, limit: Option<usize>, offset: usize) -> Result<Vec<Game>, GameError> {
        self.games.list(self.config.clamp_limit(limit), offset)
    }

    pub fn list_active_games(&self) -> Result<Vec<Game>, GameError> {
        self.games.list_by_status(GameStatus::Playing)
    }

    pub fn get_history(&self, id: GameId) -> Result<Vec<MoveRecord>, GameError> {
        self.games.get(id)?;
        self.moves.list_for_game(id)
    }

    /// Cascade delete: the move log first, then the game itself.
    pub fn delete_game(&mut self, id: GameId) -> Result<(), GameError> {
        self.games.get(id)?;
        self.moves.delete_for_game(id)?;
        self.games.delete(id)?;
        log!("game {} deleted", id);
        Ok(())
    }

    fn apply_action(
        &mut self,
        game: &mut Game,
        party: Party,
        action: &Action,
    ) -> Result<(), GameError> {
        // The record carries the turn the action was played on.
        let turn_number = game.state.current_turn;
        game.submit_action(party, action)?;

        self.moves.append(MoveRecord {
            game_id: game.id,
            turn_number,
            party,
            kind: action.kind,
            action: snapshot::encode_action(action)?,
            recorded_at: Utc::now(),
        })?;
        self.games.update(game)?;

        if game.status == GameStatus::Finished {
            log!("game {} finished: {:?}", game.id, game.outcome);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{InMemoryGameRepository, InMemoryMoveRepository};
    use engine::{ActionKind, Direction, PartyKind, Position};

    type TestService = GameService<InMemoryGameRepository, InMemoryMoveRepository>;

    fn service() -> TestService {
        GameService::with_config(
            InMemoryGameRepository::new(),
            InMemoryMoveRepository::new(),
            SessionRng::new(5),
            ServiceConfig::default(),
        )
    }

    fn human_game(service: &mut TestService) -> GameId {
        let game = service
            .create_game(PartySlot::Human, PartySlot::Human)
            .unwrap();
        service.start_game(game.id).unwrap();
        game.id
    }

    #[test]
    fn test_create_game_starts_waiting() {
        let mut service = service();
        let game = service
            .create_game(
                PartySlot::Human,
                PartySlot::from_parts(PartyKind::Com, Some("2")).unwrap(),
            )
            .unwrap();

        assert!(game.id.is_assigned());
        assert_eq!(game.status, GameStatus::Waiting);
        assert_eq!(service.get_game(game.id).unwrap().status, GameStatus::Waiting);
    }

    #[test]
    fn test_start_game_twice_fails() {
        let mut service = service();
        let id = human_game(&mut service);
        assert!(matches!(
            service.start_game(id).unwrap_err(),
            GameError::State(_)
        ));
    }

    #[test]
    fn test_operations_on_unknown_game_are_not_found() {
        let mut service = service();
        let id = GameId::new(404);
        assert_eq!(service.start_game(id).unwrap_err(), GameError::NotFound);
        assert_eq!(service.get_game(id).unwrap_err(), GameError::NotFound);
        assert_eq!(service.get_history(id).unwrap_err(), GameError::NotFound);
        assert_eq!(service.delete_game(id).unwrap_err(), GameError::NotFound);
        assert_eq!(
            service
                .submit_action(id, Party::A, &Action::defend())
                .unwrap_err(),
            GameError::NotFound
        );
    }

    #[test]
    fn test_attack_scenario_clears_wall_and_passes_turn() {
        // Party A fires downward at the border wall two cells below.
        let mut service = service();
        let id = human_game(&mut service);

        let game = service
            .submit_action(id, Party::A, &Action::attack(Direction::Down))
            .unwrap();

        assert_eq!(game.status, GameStatus::Playing);
        assert_eq!(game.state.board.get(Position::new(7, 14)), Some(engine::Cell::Empty));
        assert_eq!(game.state.current_turn, 2);
        assert_eq!(game.state.turn_party, Party::B);
    }

    #[test]
    fn test_rejected_action_is_not_recorded() {
        let mut service = service();
        let id = human_game(&mut service);

        assert_eq!(
            service
                .submit_action(id, Party::B, &Action::defend())
                .unwrap_err(),
            GameError::Turn
        );
        assert!(service.get_history(id).unwrap().is_empty());
    }

    #[test]
    fn test_history_keeps_turn_order() {
        let mut service = service();
        let id = human_game(&mut service);

        service
            .submit_action(id, Party::A, &Action::movement(Direction::Left))
            .unwrap();
        service
            .submit_action(id, Party::B, &Action::attack(Direction::Down))
            .unwrap();
        service
            .submit_action(id, Party::A, &Action::defend())
            .unwrap();

        let history = service.get_history(id).unwrap();
        let turns: Vec<(u32, Party, ActionKind)> = history
            .iter()
            .map(|record| (record.turn_number, record.party, record.kind))
            .collect();
        assert_eq!(
            turns,
            vec![
                (1, Party::A, ActionKind::Move),
                (2, Party::B, ActionKind::Attack),
                (3, Party::A, ActionKind::Defend),
            ]
        );
        assert_eq!(history[0].action, r#"{"kind":"move","direction":"left"}"#);
    }

    #[test]
    fn test_delete_game_cascades_to_history() {
        let mut service = service();
        let id = human_game(&mut service);
        service
            .submit_action(id, Party::A, &Action::defend())
            .unwrap();

        service.delete_game(id).unwrap();
        assert_eq!(service.get_game(id).unwrap_err(), GameError::NotFound);
        assert_eq!(service.get_history(id).unwrap_err(), GameError::NotFound);
    }

    #[test]
    fn test_process_com_turn_requires_com_to_move() {
        let mut service = service();
        let id = human_game(&mut service);
        assert!(matches!(
            service.process_com_turn(id).unwrap_err(),
            GameError::State(_)
        ));
    }

    #[test]
    fn test_process_com_turn_requires_playing_game() {
        let mut service = service();
        let game = service
            .create_game(
                PartySlot::from_parts(PartyKind::Com, Some("1")).unwrap(),
                PartySlot::Human,
            )
            .unwrap();
        assert!(matches!(
            service.process_com_turn(game.id).unwrap_err(),
            GameError::State(_)
        ));
    }

    #[test]
    fn test_process_com_turn_plays_through_the_common_path() {
        let mut service = service();
        let game = service
            .create_game(
                PartySlot::from_parts(PartyKind::Com, Some("2")).unwrap(),
                PartySlot::Human,
            )
            .unwrap();
        let id = game.id;
        service.start_game(id).unwrap();

        // Level 2 attacks toward the opponent: straight up into the
        // center barrier.
        let game = service.process_com_turn(id).unwrap();
        assert_eq!(game.state.board.get(Position::new(7, 7)), Some(engine::Cell::Empty));
        assert_eq!(game.state.turn_party, Party::B);
        assert_eq!(game.state.current_turn, 2);

        let history = service.get_history(id).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].party, Party::A);
        assert_eq!(history[0].kind, ActionKind::Attack);
    }

    #[test]
    fn test_com_duel_stays_consistent_over_many_turns() {
        let mut service = service();
        let com = |level: &str| PartySlot::from_parts(PartyKind::Com, Some(level)).unwrap();
        let game = service.create_game(com("1"), com("4")).unwrap();
        let id = game.id;
        service.start_game(id).unwrap();

        let mut played = 0;
        for _ in 0..40 {
            let game = service.process_com_turn(id).unwrap();
            played += 1;
            if game.status == GameStatus::Finished {
                assert!(game.outcome.is_some());
                break;
            }
            assert_eq!(game.state.current_turn, played + 1);
            assert_eq!(game.outcome, None);
        }

        assert_eq!(service.get_history(id).unwrap().len(), played as usize);
    }

    #[test]
    fn test_list_games_clamps_to_configured_maximum() {
        let mut service = GameService::with_config(
            InMemoryGameRepository::new(),
            InMemoryMoveRepository::new(),
            SessionRng::new(5),
            ServiceConfig {
                default_list_limit: 2,
                max_list_limit: 3,
            },
        );
        for _ in 0..5 {
            service
                .create_game(PartySlot::Human, PartySlot::Human)
                .unwrap();
        }

        assert_eq!(service.list_games(None, 0).unwrap().len(), 2);
        assert_eq!(service.list_games(Some(50), 0).unwrap().len(), 3);
        assert_eq!(service.list_games(Some(1), 4).unwrap().len(), 1);
    }

    #[test]
    fn test_list_active_games_tracks_status() {
        let mut service = service();
        let started = human_game(&mut service);
        service
            .create_game(PartySlot::Human, PartySlot::Human)
            .unwrap();

        let active = service.list_active_games().unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, started);
    }
}
