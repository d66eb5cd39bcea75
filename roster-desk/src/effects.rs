//! Effect runner
//!
//! Owns the HTTP client and executes the network calls the reducer asks
//! for. Each effect runs in its own task so slow requests never block key
//! handling, and overlapping submissions stay possible.

use tokio::sync::mpsc;

use roster_client::HttpClient;

use crate::app::{AppEvent, Effect};

/// Spawn the background task that executes effects
pub fn spawn_effect_runner(
    client: HttpClient,
    mut effects: mpsc::UnboundedReceiver<Effect>,
    events: mpsc::UnboundedSender<AppEvent>,
) {
    tokio::spawn(async move {
        while let Some(effect) = effects.recv().await {
            let client = client.clone();
            let events = events.clone();
            tokio::spawn(async move {
                let event = run_effect(&client, effect).await;
                if events.send(event).is_err() {
                    tracing::warn!("UI is gone, dropping completion event");
                }
            });
        }
    });
}

/// Execute a single effect against the backend
pub async fn run_effect(client: &HttpClient, effect: Effect) -> AppEvent {
    match effect {
        Effect::LoadEmployees => AppEvent::EmployeesLoaded(client.list_employees().await),
        Effect::CreateEmployee(payload) => {
            AppEvent::EmployeeCreated(client.create_employee(&payload).await)
        }
        Effect::UpdateEmployee { id, employee } => {
            AppEvent::EmployeeUpdated(client.update_employee(id, &employee).await)
        }
        Effect::DeleteEmployee { id } => AppEvent::EmployeeDeleted {
            id,
            result: client.delete_employee(id).await,
        },
    }
}
