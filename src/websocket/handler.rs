use crate::{
    error::GameError,
    models::Position,
    session::{GameSession, GuessOutcome},
    websocket::messages::{ClientMessage, ServerMessage},
    AppState,
};
use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::IntoResponse,
};
use futures::{sink::SinkExt, stream::StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

/// WebSocket upgrade handler. Every connection gets its own id and, once it
/// asks for one, its own game.
pub async fn handle_websocket(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let connection_id = Uuid::new_v4();
    tracing::info!("WebSocket upgrade requested, connection {}", connection_id);
    ws.on_upgrade(move |socket| handle_socket(socket, state, connection_id))
}

/// Handle individual WebSocket connection
async fn handle_socket(socket: WebSocket, state: Arc<AppState>, connection_id: Uuid) {
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::channel::<ServerMessage>(100);

    tracing::info!("Client connected: {}", connection_id);

    // Spawn a task to send messages to the client
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            match serde_json::to_string(&msg) {
                Ok(json) => {
                    if sender.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to serialize message: {}", e);
                }
            }
        }
    });

    // Handle incoming messages from the client
    let state_for_recv = state.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            match msg {
                Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
                    Ok(client_msg) => {
                        if let Err(e) =
                            handle_client_message(client_msg, &state_for_recv, &tx, connection_id)
                                .await
                        {
                            tracing::error!("Error handling message from {}: {}", connection_id, e);
                            let error_msg = ServerMessage::Error {
                                message: e.to_string(),
                            };
                            let _ = tx.send(error_msg).await;
                        }
                    }
                    Err(e) => {
                        tracing::error!("Failed to parse message: {}", e);
                        let error_msg = ServerMessage::Error {
                            message: format!("Invalid message format: {}", e),
                        };
                        let _ = tx.send(error_msg).await;
                    }
                },
                Message::Close(_) => {
                    tracing::info!("Client disconnected: {}", connection_id);
                    break;
                }
                _ => {}
            }
        }
    });

    // Wait for either task to finish
    tokio::select! {
        _ = (&mut send_task) => {
            recv_task.abort();
        }
        _ = (&mut recv_task) => {
            send_task.abort();
        }
    }

    // The session lives exactly as long as the connection
    if let Some((_, session)) = state.sessions.remove(&connection_id) {
        tracing::info!(
            "{} left after {}s, words found: {}/{}",
            session.player_name,
            session.elapsed_seconds(),
            session.found_words.len(),
            session.words.len()
        );
    }

    tracing::info!("WebSocket connection closed: {}", connection_id);
}

/// Handle individual client messages
pub(crate) async fn handle_client_message(
    msg: ClientMessage,
    state: &AppState,
    tx: &mpsc::Sender<ServerMessage>,
    connection_id: Uuid,
) -> anyhow::Result<()> {
    match msg {
        ClientMessage::StartGame { name, difficulty } => {
            let difficulty = difficulty.unwrap_or(state.config.game.default_difficulty);
            tracing::info!(
                "{} ({}) starting a {:?} game",
                name,
                connection_id,
                difficulty
            );

            let session = GameSession::start(name, difficulty, &state.vocabulary)?;
            tracing::debug!("Selected words: {}", session.words.join(", "));
            let dropped = session.dropped_words();
            if !dropped.is_empty() {
                tracing::warn!(
                    "Board for {} is missing {} word(s): {}",
                    connection_id,
                    dropped.len(),
                    dropped.join(", ")
                );
            }

            let reply = ServerMessage::GameStarted {
                board: session.board.clone(),
                words: session.colored_words.clone(),
                difficulty,
                started_at: session.started_at,
            };

            // A new game replaces whatever this connection was playing
            state.sessions.insert(connection_id, session);
            tx.send(reply).await?;
        }
        ClientMessage::SubmitWord { coordinates } => {
            let replies = {
                let mut session = state
                    .sessions
                    .get_mut(&connection_id)
                    .ok_or(GameError::SessionNotFound)?;
                let outcome = session.submit(&coordinates);
                guess_replies(&session, outcome, coordinates)
            };

            for reply in replies {
                tx.send(reply).await?;
            }
        }
        ClientMessage::Solve => {
            let reply = {
                let mut session = state
                    .sessions
                    .get_mut(&connection_id)
                    .ok_or(GameError::SessionNotFound)?;
                tracing::info!("{} ({}) asked for the solution", session.player_name, connection_id);
                ServerMessage::Solutions {
                    solutions: session.solve(),
                    elapsed_ms: session.elapsed_millis(),
                }
            };

            tx.send(reply).await?;
        }
    }

    Ok(())
}

/// Turn a guess outcome into the notifications the client expects
fn guess_replies(
    session: &GameSession,
    outcome: GuessOutcome,
    coordinates: Vec<Position>,
) -> Vec<ServerMessage> {
    match outcome {
        GuessOutcome::Found { word } => {
            tracing::info!("{} found: {}", session.player_name, word);
            vec![ServerMessage::WordFound {
                word,
                coordinates,
                found_words: session.found_words.clone(),
            }]
        }
        GuessOutcome::Completed {
            word,
            total_seconds,
        } => {
            tracing::info!(
                "{} found: {} and completed the game in {}s",
                session.player_name,
                word,
                total_seconds
            );
            vec![
                ServerMessage::WordFound {
                    word,
                    coordinates,
                    found_words: session.found_words.clone(),
                },
                ServerMessage::GameCompleted {
                    total_seconds,
                    found_count: session.found_words.len(),
                },
            ]
        }
        GuessOutcome::Duplicate { word } => vec![ServerMessage::WordDuplicate {
            word,
            message: "You already found this word".to_string(),
        }],
        GuessOutcome::Invalid => {
            tracing::debug!("{} submitted an invalid word", session.player_name);
            vec![ServerMessage::WordInvalid {
                message: "Not a valid word".to_string(),
            }]
        }
        GuessOutcome::Inactive => vec![ServerMessage::Error {
            message: "This game is already over".to_string(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, game::WordLocator, models::Difficulty, vocabulary::Vocabulary};
    use tokio_test::assert_ok;

    fn state() -> AppState {
        AppState::new(Config::default(), Vocabulary::builtin())
    }

    async fn start(state: &AppState, connection_id: Uuid) -> mpsc::Receiver<ServerMessage> {
        let (tx, mut rx) = mpsc::channel(16);
        let msg = ClientMessage::StartGame {
            name: "Ana".to_string(),
            difficulty: Some(Difficulty::Medium),
        };
        assert_ok!(handle_client_message(msg, state, &tx, connection_id).await);

        match rx.recv().await {
            Some(ServerMessage::GameStarted {
                board,
                words,
                difficulty,
                ..
            }) => {
                assert_eq!(difficulty, Difficulty::Medium);
                assert_eq!(board.size(), 12);
                assert_eq!(words.len(), 8);
            }
            other => panic!("expected game_started, got {:?}", other),
        }
        rx
    }

    #[tokio::test]
    async fn test_start_game_creates_session() {
        let state = state();
        let connection_id = Uuid::new_v4();
        start(&state, connection_id).await;

        let session = state.sessions.get(&connection_id).unwrap();
        assert_eq!(session.player_name, "Ana");
        assert!(session.active);
    }

    #[tokio::test]
    async fn test_submit_without_session_is_an_error() {
        let state = state();
        let (tx, _rx) = mpsc::channel(4);
        let msg = ClientMessage::SubmitWord {
            coordinates: vec![],
        };
        let err = handle_client_message(msg, &state, &tx, Uuid::new_v4())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "no active game for this connection");
    }

    #[tokio::test]
    async fn test_submit_found_duplicate_and_invalid() {
        let state = state();
        let connection_id = Uuid::new_v4();
        let mut rx = start(&state, connection_id).await;

        let (word, cells) = {
            let session = state.sessions.get(&connection_id).unwrap();
            session
                .words
                .iter()
                .find_map(|w| WordLocator::locate(&session.board, w).map(|c| (w.clone(), c)))
                .unwrap()
        };

        let (tx, mut replies) = mpsc::channel(16);
        let submit = ClientMessage::SubmitWord {
            coordinates: cells.clone(),
        };
        assert_ok!(handle_client_message(submit.clone(), &state, &tx, connection_id).await);
        match replies.recv().await {
            Some(ServerMessage::WordFound {
                word: found,
                coordinates,
                found_words,
            }) => {
                assert_eq!(found, word);
                assert_eq!(coordinates, cells);
                assert_eq!(found_words, vec![word.clone()]);
            }
            other => panic!("expected word_found, got {:?}", other),
        }

        assert_ok!(handle_client_message(submit, &state, &tx, connection_id).await);
        assert!(matches!(
            replies.recv().await,
            Some(ServerMessage::WordDuplicate { .. })
        ));

        let nonsense = ClientMessage::SubmitWord { coordinates: vec![] };
        assert_ok!(handle_client_message(nonsense, &state, &tx, connection_id).await);
        assert!(matches!(
            replies.recv().await,
            Some(ServerMessage::WordInvalid { .. })
        ));

        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_solve_reveals_and_ends_game() {
        let state = state();
        let connection_id = Uuid::new_v4();
        start(&state, connection_id).await;

        let (tx, mut replies) = mpsc::channel(16);
        assert_ok!(handle_client_message(ClientMessage::Solve, &state, &tx, connection_id).await);
        match replies.recv().await {
            Some(ServerMessage::Solutions { solutions, .. }) => assert_eq!(solutions.len(), 8),
            other => panic!("expected solutions, got {:?}", other),
        }

        let word_cells = {
            let session = state.sessions.get(&connection_id).unwrap();
            assert!(!session.active);
            WordLocator::locate(&session.board, &session.words[0])
        };
        let submit = ClientMessage::SubmitWord {
            coordinates: word_cells.unwrap_or_default(),
        };
        assert_ok!(handle_client_message(submit, &state, &tx, connection_id).await);
        assert!(matches!(
            replies.recv().await,
            Some(ServerMessage::Error { .. })
        ));
    }
}
